pub mod aggregate;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod sort;

pub use aggregate::{PortfolioAggregate, aggregate};
pub use filter::filter_projects;
pub use normalize::{BarSegments, NormalizedProject, RawProject, normalize};
pub use sort::{SortKey, sort_projects};

/// Bound `n` to `[lo, hi]`. NaN maps to `lo`.
///
/// Unlike `f64::clamp` this never panics when `lo > hi`; the result is then `lo`.
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    if n.is_nan() {
        return lo;
    }
    lo.max(hi.min(n))
}

/// Percentage of `part` over `total`, always within 0-100.
///
/// Non-finite arguments and non-positive totals yield 0.
pub fn pct(part: f64, total: f64) -> f64 {
    if !part.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    clamp(part / total * 100.0, 0.0, 100.0)
}
