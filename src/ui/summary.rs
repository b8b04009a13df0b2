use dioxus::prelude::*;

use crate::labels::Language;
use crate::progress::PortfolioAggregate;
use crate::progress::format::{overall_label, single_metric_label};
use crate::source::SingleMetric;

use super::project::ProgressBar;

#[component]
pub fn OverallSummary(aggregate: PortfolioAggregate, language: Language) -> Element {
    let text = overall_label(&aggregate, language.labels());

    rsx! {
        div { style: "background: #16213e; padding: 12px; border-radius: 4px;",
            p { style: "margin: 0; font-weight: bold;", "{text}" }
            ProgressBar { segments: aggregate.segments(), language }
        }
    }
}

/// The whole board for the `{ done, total }` document variant.
#[component]
pub fn SingleMetricPanel(metric: SingleMetric, language: Language) -> Element {
    let text = single_metric_label(metric.done, metric.total, metric.pct(), language.labels());

    rsx! {
        div { style: "background: #16213e; padding: 12px; border-radius: 4px;",
            p { style: "margin: 0; font-weight: bold;", "{text}" }
            ProgressBar { segments: metric.segments(), language }
        }
    }
}
