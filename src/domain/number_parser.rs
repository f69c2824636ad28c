//! Locale-flexible numeric text parsing.
//!
//! Accepts amounts written in either of two conventions: decimal-comma
//! ("10.000,50") or decimal-point ("10,000.50"). When both separators are
//! present, the one occurring last in the string is the decimal separator.
//! When only one is present, a strict three-digit grouping pattern
//! ("1,234", "12.345.678") marks it as a thousands separator; anything
//! else marks it as the decimal point.
//!
//! Parsing is total: any input that cannot be read as a number yields 0.0.
//! A mistyped amount therefore becomes a zero-value operation rather than
//! a parse error; downstream validation rejects it only because principals
//! must be positive. This fallback is kept for compatibility with the
//! behaviour of the system this replaces.

/// Parse a free-form amount string into a number. Never fails; returns 0.0
/// for anything unparseable.
pub fn parse_flexible(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    let has_comma = cleaned.contains(',');
    let has_period = cleaned.contains('.');

    let normalized = match (has_comma, has_period) {
        (true, true) => {
            // The separator that appears last is the decimal separator.
            let last_comma = cleaned.rfind(',').unwrap_or(0);
            let last_period = cleaned.rfind('.').unwrap_or(0);
            if last_comma > last_period {
                cleaned.replace('.', "").replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (true, false) => {
            if is_strict_grouping(&cleaned, ',') {
                cleaned.replace(',', "")
            } else {
                cleaned.replace(',', ".")
            }
        }
        (false, true) => {
            if is_strict_grouping(&cleaned, '.') {
                cleaned.replace('.', "")
            } else {
                cleaned
            }
        }
        (false, false) => cleaned,
    };

    normalized.parse::<f64>().unwrap_or(0.0)
}

/// [`parse_flexible`] lifted over optional input; absent text parses as 0.0.
pub fn parse_flexible_opt(text: Option<&str>) -> f64 {
    text.map(parse_flexible).unwrap_or(0.0)
}

/// True when `s` is digits grouped in exact threes by `sep`: a leading run
/// of one to three digits followed by one or more groups of exactly three.
fn is_strict_grouping(s: &str, sep: char) -> bool {
    let mut chunks = s.split(sep);
    let first = match chunks.next() {
        Some(c) => c,
        None => return false,
    };
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut saw_group = false;
    for chunk in chunks {
        if chunk.len() != 3 || !chunk.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        saw_group = true;
    }
    saw_group
}
