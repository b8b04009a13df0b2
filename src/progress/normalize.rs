use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::sort::range_key;
use super::{clamp, pct};

/// A project entry exactly as it arrived in the JSON document.
///
/// Every field is kept as a raw JSON value: nothing about presence or type is trusted
/// until `normalize` runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawProject {
    pub title: Value,
    pub range: Value,
    pub subtitle: Value,
    pub note: Value,
    pub total: Value,
    pub partial: Value,
    pub complete: Value,
}

impl RawProject {
    /// Build from any JSON value. Non-object entries become an all-default record.
    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// A project with repaired counts: `0 <= complete <= partial <= total`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProject {
    pub title: String,
    pub range: String,
    pub subtitle: String,
    pub note: Option<String>,
    pub total: f64,
    /// Covered units, complete ones included.
    pub partial: f64,
    pub complete: f64,
    haystack: String,
    range_key: (u32, u32),
}

/// Widths (percent) of the three stacked bar segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarSegments {
    pub complete: f64,
    pub partial_only: f64,
    pub remaining: f64,
}

impl BarSegments {
    pub fn new(complete_pct: f64, coverage_pct: f64) -> Self {
        Self {
            complete: complete_pct,
            partial_only: clamp(coverage_pct - complete_pct, 0.0, 100.0),
            remaining: clamp(100.0 - coverage_pct, 0.0, 100.0),
        }
    }
}

impl NormalizedProject {
    pub fn complete_pct(&self) -> f64 {
        pct(self.complete, self.total)
    }

    pub fn coverage_pct(&self) -> f64 {
        pct(self.partial, self.total)
    }

    /// Units with no progress at all.
    pub fn remaining(&self) -> f64 {
        (self.total - self.partial).max(0.0)
    }

    pub fn segments(&self) -> BarSegments {
        BarSegments::new(self.complete_pct(), self.coverage_pct())
    }

    /// Lowercased title, range and subtitle, used for text filtering.
    pub fn haystack(&self) -> &str {
        &self.haystack
    }

    /// `(start_year, end_year)` parsed from the range label.
    pub fn range_key(&self) -> (u32, u32) {
        self.range_key
    }
}

/// Coerce a loosely typed JSON value to a number; anything unusable becomes 0.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_text(s),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_nan() { 0.0 } else { n }
}

/// Numeric text as a browser reads it: trimmed, empty is 0, only the exact
/// `Infinity` spelling is infinite, `0x`/`0o`/`0b` prefixes select a radix.
/// Unparsable text is NaN.
fn parse_numeric_text(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // `str::parse` also takes "inf", "nan" and friends; only exponents may carry letters
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce a loosely typed JSON value to non-empty text.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Repair a raw record into a `NormalizedProject`.
///
/// Out-of-range counts are clamped, never rejected. When `partial < complete`,
/// partial is raised to complete.
pub fn normalize(raw: &RawProject, fallback_title: &str) -> NormalizedProject {
    let raw_total = coerce_number(&raw.total);
    let raw_partial = coerce_number(&raw.partial);
    let raw_complete = coerce_number(&raw.complete);

    let total = raw_total.max(0.0);
    let complete = clamp(raw_complete, 0.0, total);
    let partial = clamp(raw_partial, complete, total);

    let title = coerce_text(&raw.title).unwrap_or_else(|| fallback_title.to_string());
    let range = coerce_text(&raw.range).unwrap_or_default();
    let subtitle = coerce_text(&raw.subtitle).unwrap_or_default();
    let note = coerce_text(&raw.note);

    if total != raw_total || partial != raw_partial || complete != raw_complete {
        debug!(
            "Repaired counts for {title:?}: total {raw_total}→{total}, \
             partial {raw_partial}→{partial}, complete {raw_complete}→{complete}"
        );
    }

    let haystack = format!("{title} {range} {subtitle}").to_lowercase();
    let range_key = range_key(&range);

    NormalizedProject {
        title,
        range,
        subtitle,
        note,
        total,
        partial,
        complete,
        haystack,
        range_key,
    }
}
