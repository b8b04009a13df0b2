use crate::labels::{Labels, Language};

use super::{NormalizedProject, PortfolioAggregate};

/// Round to an integer and group thousands the way the language does.
pub fn format_count(n: f64, language: Language) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let rounded = n.round();
    let digits = format!("{:.0}", rounded.abs());
    let sep = language.group_separator();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// One decimal place plus a percent sign.
pub fn format_pct(p: f64) -> String {
    format!("{p:.1}%")
}

/// `partial/total • remaining N` for a project card.
pub fn project_counts_label(project: &NormalizedProject, labels: &Labels) -> String {
    let lang = labels.language;
    format!(
        "{}/{} • {} {}",
        format_count(project.partial, lang),
        format_count(project.total, lang),
        labels.remaining,
        format_count(project.remaining(), lang),
    )
}

/// Portfolio summary line, e.g. `Totale: 20/30 (66.7% copertura) • 33.3% completati`.
pub fn overall_label(agg: &PortfolioAggregate, labels: &Labels) -> String {
    let lang = labels.language;
    format!(
        "{}: {}/{} ({} {}) • {} {}",
        labels.total,
        format_count(agg.partial, lang),
        format_count(agg.total, lang),
        format_pct(agg.coverage_pct),
        labels.coverage,
        format_pct(agg.complete_pct),
        labels.completed,
    )
}

/// Summary line for a single done/total metric.
pub fn single_metric_label(done: f64, total: f64, pct: f64, labels: &Labels) -> String {
    let lang = labels.language;
    format!(
        "{}: {}/{} ({} {})",
        labels.total,
        format_count(done, lang),
        format_count(total, lang),
        format_pct(pct),
        labels.completed,
    )
}

pub fn updated_label(updated: Option<&str>, labels: &Labels) -> String {
    format!("{}: {}", labels.updated, updated.unwrap_or("—"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{RawProject, aggregate, normalize};
    use serde_json::json;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0.0, Language::It), "0");
        assert_eq!(format_count(999.0, Language::It), "999");
        assert_eq!(format_count(1000.0, Language::It), "1.000");
        assert_eq!(format_count(1234567.0, Language::It), "1.234.567");
        assert_eq!(format_count(1234567.0, Language::En), "1,234,567");
        assert_eq!(format_count(-12345.0, Language::En), "-12,345");
    }

    #[test]
    fn rounds_and_handles_non_finite() {
        assert_eq!(format_count(1499.6, Language::It), "1.500");
        assert_eq!(format_count(f64::INFINITY, Language::It), "0");
        assert_eq!(format_count(f64::NAN, Language::En), "0");
    }

    #[test]
    fn counts_beyond_u64_keep_their_magnitude() {
        assert_eq!(format_count(1e20, Language::It), "100.000.000.000.000.000.000");
        assert_eq!(format_count(-1e20, Language::En), "-100,000,000,000,000,000,000");
        assert_eq!(format_count(1e300, Language::It).len(), 301 + 100);
    }

    #[test]
    fn pct_one_decimal() {
        assert_eq!(format_pct(66.666_666), "66.7%");
        assert_eq!(format_pct(0.0), "0.0%");
        assert_eq!(format_pct(100.0), "100.0%");
    }

    #[test]
    fn overall_line_italian() {
        let projects: Vec<_> = [json!({"total": 10, "partial": 10, "complete": 10}),
                                json!({"total": 20, "partial": 10, "complete": 0})]
            .into_iter()
            .map(|v| normalize(&RawProject::from_value(v), "Progetto"))
            .collect();
        let agg = aggregate(&projects);
        assert_eq!(
            overall_label(&agg, Language::It.labels()),
            "Totale: 20/30 (66.7% copertura) • 33.3% completati"
        );
        assert_eq!(
            overall_label(&agg, Language::En.labels()),
            "Total: 20/30 (66.7% coverage) • 33.3% complete"
        );
    }

    #[test]
    fn project_counts() {
        let p = normalize(
            &RawProject::from_value(json!({"total": 12000, "partial": 4500, "complete": 100})),
            "Progetto",
        );
        assert_eq!(
            project_counts_label(&p, Language::It.labels()),
            "4.500/12.000 • rimanenti 7.500"
        );
    }

    #[test]
    fn single_metric_and_updated() {
        assert_eq!(
            single_metric_label(5.0, 10.0, 50.0, Language::En.labels()),
            "Total: 5/10 (50.0% complete)"
        );
        assert_eq!(
            updated_label(Some("2024-05-01"), Language::It.labels()),
            "Ultimo aggiornamento: 2024-05-01"
        );
        assert_eq!(updated_label(None, Language::En.labels()), "Last updated: —");
    }
}
