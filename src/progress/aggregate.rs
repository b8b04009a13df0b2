use super::{BarSegments, NormalizedProject, pct};

/// Portfolio-wide sums across every tracked project.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioAggregate {
    pub total: f64,
    pub partial: f64,
    pub complete: f64,
    pub coverage_pct: f64,
    pub complete_pct: f64,
}

impl PortfolioAggregate {
    pub fn segments(&self) -> BarSegments {
        BarSegments::new(self.complete_pct, self.coverage_pct)
    }
}

/// Sum normalized records. An empty slice gives all zeros.
pub fn aggregate(projects: &[NormalizedProject]) -> PortfolioAggregate {
    let (total, partial, complete) = projects.iter().fold((0.0, 0.0, 0.0), |(t, p, c), proj| {
        (t + proj.total, p + proj.partial, c + proj.complete)
    });

    PortfolioAggregate {
        total,
        partial,
        complete,
        coverage_pct: pct(partial, total),
        complete_pct: pct(complete, total),
    }
}
