//! Package-size extraction and unit canonicalization.
//!
//! Sizes normalize into a single volume/mass family (ml or g equivalent)
//! through a fixed multiplier table, so "4.2oz" and "124ml" become
//! comparable numbers.

use once_cell::sync::Lazy;
use regex::Regex;

use harmonize_core::models::normalization::SizeInfo;

/// Longest alternatives first so "kg" is never read as "g" and "lbs" never
/// as "l".
static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(fl\s*oz|floz|liter|litre|ltr|ml|oz|gram|gm|kg|g|lbs|lb|count|ct|pack|pk|l)\b",
    )
    .expect("size pattern compiles")
});

/// Multiplier into the canonical ml/g family.
fn unit_multiplier(unit: &str) -> f64 {
    match unit {
        "ml" | "g" | "gm" | "gram" | "ct" | "count" | "pk" | "pack" => 1.0,
        "l" | "ltr" | "liter" | "litre" | "kg" => 1000.0,
        "oz" | "floz" => 29.5735,
        "lb" | "lbs" => 453.592,
        _ => 1.0,
    }
}

/// Canonical display unit: "floz"/"fl oz" fold to "oz", litre spellings to
/// "L", "gm" to "g"; everything else passes through.
fn canonical_unit(unit: &str) -> &str {
    match unit {
        "floz" => "oz",
        "l" | "ltr" | "liter" | "litre" => "L",
        "gm" => "g",
        other => other,
    }
}

fn size_from_captures(value: &str, unit: &str) -> Option<SizeInfo> {
    let value: f64 = value.parse().ok()?;
    let unit: String = unit
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let canonical = (value * unit_multiplier(&unit) * 100.0).round() / 100.0;
    Some(SizeInfo {
        value,
        unit: canonical_unit(&unit).to_string(),
        canonical,
    })
}

/// Extract the first size occurrence from a text, if any.
pub fn extract_size(text: &str) -> Option<SizeInfo> {
    let caps = SIZE_PATTERN.captures(text)?;
    size_from_captures(&caps[1], &caps[2])
}

/// Extract the first size occurrence and return the text with it removed.
pub fn split_size(text: &str) -> (Option<SizeInfo>, String) {
    match SIZE_PATTERN.captures(text) {
        Some(caps) => {
            let size = size_from_captures(&caps[1], &caps[2]);
            let full = caps.get(0).expect("group 0 always present");
            let mut remainder = String::with_capacity(text.len());
            remainder.push_str(&text[..full.start()]);
            remainder.push_str(&text[full.end()..]);
            (size, remainder.trim().to_string())
        }
        None => (None, text.trim().to_string()),
    }
}

/// Render a size as the normalized-text suffix, e.g. "4.2oz" or "12oz".
pub fn format_suffix(size: &SizeInfo) -> String {
    if size.value.fract().abs() < f64::EPSILON {
        format!("{}{}", size.value as i64, size.unit)
    } else {
        format!("{}{}", size.value, size.unit)
    }
}
