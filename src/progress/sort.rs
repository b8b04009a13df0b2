use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use super::NormalizedProject;

/// Sort key for ranges with no parsable years; larger than any real year.
pub const UNPARSED_YEAR: u32 = 999_999;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{3,4})\s*[-–—]\s*(\d{3,4})\b").expect("range pattern is valid")
});

/// Ordering applied to the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    NameAsc,
    #[default]
    RangeAsc,
    RangeDesc,
    CompleteDesc,
    CoverageDesc,
    RemainingAsc,
}

impl SortKey {
    /// All keys, in the order the selector lists them.
    pub const ALL: [SortKey; 6] = [
        SortKey::RangeAsc,
        SortKey::RangeDesc,
        SortKey::NameAsc,
        SortKey::CompleteDesc,
        SortKey::CoverageDesc,
        SortKey::RemainingAsc,
    ];

    /// Parse a key string. Unknown strings fall back to `RangeAsc`.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "name_asc" => SortKey::NameAsc,
            "range_asc" => SortKey::RangeAsc,
            "range_desc" => SortKey::RangeDesc,
            "complete_desc" => SortKey::CompleteDesc,
            "coverage_desc" => SortKey::CoverageDesc,
            "remaining_asc" => SortKey::RemainingAsc,
            _ => SortKey::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name_asc",
            SortKey::RangeAsc => "range_asc",
            SortKey::RangeDesc => "range_desc",
            SortKey::CompleteDesc => "complete_desc",
            SortKey::CoverageDesc => "coverage_desc",
            SortKey::RemainingAsc => "remaining_asc",
        }
    }

    pub fn compare(self, a: &NormalizedProject, b: &NormalizedProject) -> Ordering {
        match self {
            SortKey::NameAsc => by_name(a, b),
            SortKey::RangeAsc => by_range(a, b),
            SortKey::RangeDesc => by_range(a, b).reverse(),
            SortKey::CompleteDesc => b
                .complete_pct()
                .total_cmp(&a.complete_pct())
                .then_with(|| by_name(a, b)),
            SortKey::CoverageDesc => b
                .coverage_pct()
                .total_cmp(&a.coverage_pct())
                .then_with(|| by_name(a, b)),
            SortKey::RemainingAsc => a
                .remaining()
                .total_cmp(&b.remaining())
                .then_with(|| by_name(a, b)),
        }
    }
}

/// Stable in-place sort.
pub fn sort_projects(projects: &mut [NormalizedProject], key: SortKey) {
    projects.sort_by(|a, b| key.compare(a, b));
}

/// Parse `(start, end)` years from labels like `1682-1743` or `1682 – 1743`.
pub fn range_key(range: &str) -> (u32, u32) {
    RANGE_RE
        .captures(range)
        .and_then(|caps| {
            let start = caps.get(1)?.as_str().parse().ok()?;
            let end = caps.get(2)?.as_str().parse().ok()?;
            Some((start, end))
        })
        .unwrap_or((UNPARSED_YEAR, UNPARSED_YEAR))
}

fn by_range(a: &NormalizedProject, b: &NormalizedProject) -> Ordering {
    a.range_key()
        .cmp(&b.range_key())
        .then_with(|| by_name(a, b))
}

/// Case- and accent-insensitive title order, raw text as the final tie-break.
fn by_name(a: &NormalizedProject, b: &NormalizedProject) -> Ordering {
    collation_key(&a.title)
        .cmp(&collation_key(&b.title))
        .then_with(|| a.title.cmp(&b.title))
}

fn collation_key(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
