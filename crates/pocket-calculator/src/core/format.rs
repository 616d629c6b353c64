//! Display formatting for operand text

use serde::{Deserialize, Serialize};

/// Thousands grouping applied to the integer part of an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Character inserted between digit groups
    pub group_separator: char,
    /// Number of digits per group
    pub group_size: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
            group_size: 3,
        }
    }
}

impl DisplayFormat {
    /// Formats an operand for display
    ///
    /// The integer part is grouped, the fractional part is kept verbatim.
    /// An integer part that is not a number renders as nothing, so a lone
    /// `"."` shows as `"."` and an empty operand shows as `""`.
    #[must_use]
    pub fn format(&self, operand: &str) -> String {
        let (integer, fraction) = match operand.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (operand, None),
        };

        let mut out = self.group_integer(integer).unwrap_or_default();
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Groups a signed run of decimal digits; `None` if it is not one
    fn group_integer(&self, integer: &str) -> Option<String> {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer.strip_prefix('+').unwrap_or(integer)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        let size = self.group_size.max(1);

        let mut grouped = String::with_capacity(sign.len() + digits.len() * 2);
        grouped.push_str(sign);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % size == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        Some(grouped)
    }
}

/// Formats an operand with the default `1,234.5` style
#[must_use]
pub fn format_for_display(operand: &str) -> String {
    DisplayFormat::default().format(operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands_and_keeps_fraction() {
        assert_eq!(format_for_display("1234567.89"), "1,234,567.89");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_for_display("0"), "0");
    }

    #[test]
    fn test_short_integers_are_not_grouped() {
        assert_eq!(format_for_display("7"), "7");
        assert_eq!(format_for_display("999"), "999");
        assert_eq!(format_for_display("1000"), "1,000");
    }

    #[test]
    fn test_trailing_decimal_point_is_kept() {
        assert_eq!(format_for_display("0."), "0.");
        assert_eq!(format_for_display("1234."), "1,234.");
    }

    #[test]
    fn test_fraction_is_not_grouped_or_rounded() {
        assert_eq!(format_for_display("0.1234567"), "0.1234567");
        assert_eq!(
            format_for_display("0.30000000000000004"),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_unparseable_integer_part_is_empty() {
        assert_eq!(format_for_display("."), ".");
        assert_eq!(format_for_display(".5"), ".5");
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("-"), "");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_for_display("-1234"), "-1,234");
        assert_eq!(format_for_display("-0.5"), "-0.5");
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(format_for_display("007"), "7");
        assert_eq!(format_for_display("000"), "0");
    }

    #[test]
    fn test_large_integers_are_not_rounded() {
        assert_eq!(
            format_for_display("12345678901234567890"),
            "12,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_custom_separator_and_group_size() {
        let format = DisplayFormat {
            group_separator: ' ',
            group_size: 4,
        };
        assert_eq!(format.format("123456789.5"), "1 2345 6789.5");
    }

    #[test]
    fn test_zero_group_size_is_treated_as_one() {
        let format = DisplayFormat {
            group_separator: '.',
            group_size: 0,
        };
        assert_eq!(format.format("123"), "1.2.3");
    }
}
