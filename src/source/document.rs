use serde_json::{Map, Value};

use crate::labels::Labels;
use crate::progress::normalize::coerce_text;
use crate::progress::{BarSegments, NormalizedProject, PortfolioAggregate, RawProject, aggregate, normalize, pct};

/// A validated document, before per-record normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Portfolio(PortfolioDocument),
    SingleMetric(SingleMetric),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    pub title: Option<String>,
    pub updated: Option<String>,
    pub credit: Option<String>,
    pub projects: Vec<RawProject>,
}

/// One aggregate bar driven by `done` over `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleMetric {
    pub done: f64,
    pub total: f64,
    pub updated: Option<String>,
}

impl SingleMetric {
    pub fn pct(&self) -> f64 {
        pct(self.done, self.total)
    }

    pub fn segments(&self) -> BarSegments {
        let pct = self.pct();
        BarSegments::new(pct, pct)
    }
}

/// The document shape was wrong. Per-record value problems are never schema errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaError {
    /// Not an object, or `projects` is missing or not a list.
    ExpectedPortfolio,
    /// `done`/`total` not finite numbers, or `total <= 0`.
    InvalidSingleMetric,
}

impl SchemaError {
    pub fn message(&self, labels: &Labels) -> String {
        format!("{}: {}", labels.must_contain, self.expected_shape())
    }

    pub fn expected_shape(&self) -> &'static str {
        match self {
            SchemaError::ExpectedPortfolio => "{ title, updated, credit, projects: [...] }",
            SchemaError::InvalidSingleMetric => "{ done, total (> 0), updated }",
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}", self.expected_shape())
    }
}

impl std::error::Error for SchemaError {}

impl Document {
    /// Decide the variant and check the required fields.
    ///
    /// An object with `projects` is a portfolio; one without `projects` but with `done`
    /// is a single metric; anything else is rejected as a malformed portfolio.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let Value::Object(mut obj) = value else {
            return Err(SchemaError::ExpectedPortfolio);
        };

        if let Some(projects) = obj.remove("projects") {
            let Value::Array(items) = projects else {
                return Err(SchemaError::ExpectedPortfolio);
            };
            return Ok(Document::Portfolio(PortfolioDocument {
                title: text_field(&obj, "title"),
                updated: text_field(&obj, "updated"),
                credit: text_field(&obj, "credit"),
                projects: items.into_iter().map(RawProject::from_value).collect(),
            }));
        }

        if obj.contains_key("done") {
            let done = finite_number(&obj, "done").ok_or(SchemaError::InvalidSingleMetric)?;
            let total = finite_number(&obj, "total").ok_or(SchemaError::InvalidSingleMetric)?;
            if total <= 0.0 {
                return Err(SchemaError::InvalidSingleMetric);
            }
            return Ok(Document::SingleMetric(SingleMetric {
                done,
                total,
                updated: text_field(&obj, "updated"),
            }));
        }

        Err(SchemaError::ExpectedPortfolio)
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(coerce_text)
}

fn finite_number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key)?.as_f64().filter(|n| n.is_finite())
}

/// A fully loaded, normalized board ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Board {
    Portfolio(Portfolio),
    SingleMetric(SingleMetric),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub title: Option<String>,
    pub updated: Option<String>,
    pub credit: Option<String>,
    pub projects: Vec<NormalizedProject>,
    pub aggregate: PortfolioAggregate,
}

impl Board {
    pub fn from_document(doc: Document, labels: &Labels) -> Self {
        match doc {
            Document::Portfolio(doc) => {
                let projects: Vec<NormalizedProject> = doc
                    .projects
                    .iter()
                    .map(|raw| normalize(raw, labels.fallback_project))
                    .collect();
                let aggregate = aggregate(&projects);
                Board::Portfolio(Portfolio {
                    title: doc.title,
                    updated: doc.updated,
                    credit: doc.credit,
                    projects,
                    aggregate,
                })
            }
            Document::SingleMetric(metric) => Board::SingleMetric(metric),
        }
    }

    pub fn updated(&self) -> Option<&str> {
        match self {
            Board::Portfolio(p) => p.updated.as_deref(),
            Board::SingleMetric(m) => m.updated.as_deref(),
        }
    }

    pub fn project_count(&self) -> usize {
        match self {
            Board::Portfolio(p) => p.projects.len(),
            Board::SingleMetric(_) => 0,
        }
    }
}
