//! Locale-aware KPI text for the CLI: `12,345.68 B`, `3.21%`, `N/A`.

use num_format::{Locale, ToFormattedString};

/// Placeholder shown for missing data.
pub const NOT_AVAILABLE: &str = "N/A";

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Group the integer part per locale and keep `decimals` fraction digits.
pub fn format_number(value: f64, decimals: usize, locale_tag: &str) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(locale))
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}{dec_sep}{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Amount in billions, e.g. `1,234.57 B`.
pub fn format_billions(value: f64, decimals: usize, locale_tag: &str) -> String {
    format!("{} B", format_number(value, decimals, locale_tag))
}

/// Percentage with 2 decimals, or `N/A` when undefined.
pub fn format_percent(value: Option<f64>, locale_tag: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", format_number(v, 2, locale_tag)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_per_locale() {
        assert_eq!(format_number(1234567.891, 2, "en"), "1,234,567.89");
        assert_eq!(format_number(1234567.891, 2, "de"), "1.234.567,89");
        assert_eq!(format_number(30000.0, 0, "en"), "30,000");
    }

    #[test]
    fn negatives_and_zero() {
        assert_eq!(format_number(-1234.5, 1, "en"), "-1,234.5");
        assert_eq!(format_number(-0.001, 2, "en"), "0.00");
    }

    #[test]
    fn kpi_helpers() {
        assert_eq!(format_billions(27360.0, 0, "en"), "27,360 B");
        assert_eq!(format_percent(Some(3.2), "en"), "3.20%");
        assert_eq!(format_percent(None, "en"), "N/A");
    }
}
