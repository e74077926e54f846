mod catalog;
mod order;
mod pizza;
mod size;
mod topping;

pub use catalog::Catalog;
pub use order::Order;
pub use pizza::Pizza;
pub use size::Size;
pub use topping::Topping;
