//! Locale-styled rendering of numeric values.
//!
//! Mirrors the two conventions the parser accepts: decimal-comma
//! ("1.234.567,89") and decimal-point ("1,234,567.89"). All formatters are
//! total; non-finite values render as the fixed placeholder `--`.

/// Placeholder rendered for NaN and infinite values.
pub const NON_FINITE_PLACEHOLDER: &str = "--";

/// Which punctuation mark plays the decimal point versus thousands grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericConvention {
    /// Period groups thousands, comma marks the decimal: 1.234,56.
    #[default]
    DecimalComma,
    /// Comma groups thousands, period marks the decimal: 1,234.56.
    DecimalPoint,
}

impl NumericConvention {
    fn thousands_sep(self) -> char {
        match self {
            NumericConvention::DecimalComma => '.',
            NumericConvention::DecimalPoint => ',',
        }
    }

    fn decimal_sep(self) -> char {
        match self {
            NumericConvention::DecimalComma => ',',
            NumericConvention::DecimalPoint => '.',
        }
    }
}

/// Render `value` with `decimals` fixed fractional digits, thousands
/// grouping, and the separators of `convention`.
pub fn format_decimal(value: f64, decimals: usize, convention: NumericConvention) -> String {
    if !value.is_finite() {
        return NON_FINITE_PLACEHOLDER.to_string();
    }

    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = group_thousands(int_part, convention.thousands_sep());

    match frac_part {
        Some(frac) => format!("{sign}{grouped}{}{frac}", convention.decimal_sep()),
        None => format!("{sign}{grouped}"),
    }
}

/// Money rendering: currency marker, a space, then the value with two
/// decimal places.
pub fn format_currency(value: f64, symbol: &str, convention: NumericConvention) -> String {
    format!("{symbol} {}", format_decimal(value, 2, convention))
}

/// Percentage rendering of a fraction: 0.1234 becomes "12,34%" under the
/// decimal-comma convention.
pub fn format_percent(fraction: f64, decimals: usize, convention: NumericConvention) -> String {
    if !fraction.is_finite() {
        return NON_FINITE_PLACEHOLDER.to_string();
    }
    format!("{}%", format_decimal(fraction * 100.0, decimals, convention))
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    grouped
}
