//! Small presentational and cookie helpers

use rust_decimal::Decimal;

/// Formats a price for display, e.g. `$9.00`
pub fn format_currency(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Uppercases the first character of a label, e.g. `small` becomes `Small`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reads one cookie value out of a `Cookie` request header
///
/// The form only needs this for the anti-forgery token; actual browser
/// cookie access belongs to the embedding application.
pub fn get_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_pads_cents() {
        assert_eq!(format_currency(dec!(9)), "$9.00");
        assert_eq!(format_currency(dec!(5.75)), "$5.75");
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("small"), "Small");
        assert_eq!(capitalize("bell peppers"), "Bell peppers");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_get_cookie() {
        let header = "sessionid=abc123; csrftoken=tok-456; theme=dark";

        assert_eq!(get_cookie(header, "csrftoken"), Some("tok-456"));
        assert_eq!(get_cookie(header, "sessionid"), Some("abc123"));
        assert_eq!(get_cookie(header, "missing"), None);
    }
}
