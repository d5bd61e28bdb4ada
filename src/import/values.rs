//! Pure value parsing for header fields: numbers, number lists, durations.
//!
//! Slicers decorate values with units and labels ("1.23456m", "12.3 g").
//! Numbers are recovered by dropping every character that is not a digit,
//! a sign or a decimal point. Anything that still doesn't parse, or parses
//! to a non-finite value, is treated as absent.

/// `"1.23456m"` → `Some(1.23456)`, `"n/a"` → `None`
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"12.5, 3.25"` → `[12.5, 3.25]`. Unparseable entries are skipped.
pub fn parse_number_list(raw: &str) -> Vec<f64> {
    raw.split(',').filter_map(parse_number).collect()
}

/// Seconds from either a bare number (`"5025"`) or a unit string
/// (`"1d 2h 3m 4s"`, `"45m 3s"`). A trailing bare number counts as seconds.
pub fn parse_duration_seconds(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if !raw.chars().any(|c| matches!(c, 'd' | 'h' | 'm' | 's')) {
        return parse_number(raw);
    }

    let mut total = 0.0;
    let mut seen = false;
    let mut number = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        let unit = match c {
            'd' => 86_400.0,
            'h' => 3_600.0,
            'm' => 60.0,
            's' => 1.0,
            _ => continue,
        };
        if let Ok(v) = number.parse::<f64>() {
            total += v * unit;
            seen = true;
        }
        number.clear();
    }
    if let Ok(v) = number.parse::<f64>() {
        total += v;
        seen = true;
    }

    (seen && total.is_finite()).then_some(total)
}

/// Trimmed text with surrounding quotes removed, `None` when nothing is left
pub fn parse_text(raw: &str) -> Option<String> {
    let text = raw.trim().trim_matches('"').trim();
    (!text.is_empty()).then(|| text.to_string())
}
