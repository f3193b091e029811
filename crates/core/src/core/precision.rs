use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // optional sign, integer digits, point, fractional digits
    static ref DECIMAL_LITERAL: Regex = Regex::new(r"-?\d+\.\d+").unwrap();
}

/// Rounds every decimal literal in already-serialized text to at most
/// `max_digits` decimal places, stripping trailing zeros and a trailing
/// bare point (`1.500000` -> `1.5`, `1.0000000001` -> `1` at 6 digits).
///
/// Works on text, not the tree, so a decimal-shaped substring inside a
/// quoted string is rewritten too. Anything that fails to parse is left
/// untouched.
pub fn reduce_precision(text: &str, max_digits: usize) -> String {
    DECIMAL_LITERAL
        .replace_all(text, |caps: &Captures| {
            let literal = &caps[0];

            match literal.parse::<f64>() {
                Ok(value) => {
                    let mut rounded = format!("{:.*}", max_digits, value);
                    if rounded.contains('.') {
                        while rounded.ends_with('0') {
                            rounded.pop();
                        }
                        if rounded.ends_with('.') {
                            rounded.pop();
                        }
                    }
                    rounded
                }
                Err(_) => literal.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_decimal_places() {
        assert_eq!(reduce_precision("1.123456789", 6), "1.123457");
        assert_eq!(reduce_precision("-12.987654321", 3), "-12.988");
        assert_eq!(reduce_precision("100.123456789", 6), "100.123457");
    }

    #[test]
    fn strips_trailing_zeros_and_point() {
        assert_eq!(reduce_precision("1.500000", 6), "1.5");
        assert_eq!(reduce_precision("1.0000000001", 6), "1");
        assert_eq!(reduce_precision("120.0", 6), "120");
    }

    #[test]
    fn integers_and_non_numeric_text_untouched() {
        assert_eq!(reduce_precision("42", 6), "42");
        assert_eq!(reduce_precision("\"a\":true", 6), "\"a\":true");
        assert_eq!(reduce_precision("1.2.3", 6), "1.2.3");
    }

    #[test]
    fn rewrites_every_literal_in_a_document() {
        assert_eq!(
            reduce_precision(r#"{"x":1.2345678,"y":[-0.100000,2.0]}"#, 3),
            r#"{"x":1.235,"y":[-0.1,2]}"#
        );
    }

    #[test]
    fn decimal_shaped_substring_inside_string_is_rewritten() {
        // textual pass, known limitation
        assert_eq!(
            reduce_precision(r#"{"note":"v1.250000"}"#, 2),
            r#"{"note":"v1.25"}"#
        );
    }
}
