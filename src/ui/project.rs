use dioxus::prelude::*;

use crate::labels::Language;
use crate::progress::format::{format_pct, project_counts_label};
use crate::progress::{BarSegments, NormalizedProject};

#[component]
pub fn ProjectList(projects: Vec<NormalizedProject>, language: Language) -> Element {
    let labels = language.labels();

    rsx! {
        div {
            for (i, project) in projects.iter().enumerate() {
                ProjectCard { key: "{i}", project: project.clone(), language }
            }
            if projects.is_empty() {
                p { style: "color: #666;", "{labels.no_matches}" }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: NormalizedProject, language: Language) -> Element {
    let labels = language.labels();
    let coverage = format_pct(project.coverage_pct());
    let complete = format_pct(project.complete_pct());
    let counts = project_counts_label(&project, labels);
    let subtitle = if project.subtitle.is_empty() {
        String::new()
    } else {
        format!(" • {}", project.subtitle)
    };

    rsx! {
        div { class: "proj",
            style: "background: #16213e; padding: 12px; margin: 8px 0; border-radius: 4px;",
            div { style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    div { style: "font-weight: bold; font-size: 15px;", "{project.title}" }
                    div { style: "color: #888; font-size: 12px;", "{project.range}{subtitle}" }
                }
                div { style: "text-align: right; font-size: 12px;",
                    div { b { "{coverage}" } " {labels.coverage}" }
                    div { b { "{complete}" } " {labels.completed}" }
                    div { style: "color: #888;", "{counts}" }
                }
            }
            ProgressBar { segments: project.segments(), language }
            if let Some(note) = &project.note {
                p { style: "color: #aaa; font-size: 11px; margin: 6px 0 0 0;", "{note}" }
            }
        }
    }
}

/// Stacked complete | partial-only | remaining bar.
#[component]
pub fn ProgressBar(segments: BarSegments, language: Language) -> Element {
    let labels = language.labels();

    rsx! {
        div {
            style: "display: flex; height: 12px; margin-top: 8px; border-radius: 3px; overflow: hidden; background: #0f0f1e;",
            "aria-label": "{labels.progress_bar}",
            div { class: "seg complete", style: "width: {segments.complete}%; background: #2ecc71;" }
            div { class: "seg partial", style: "width: {segments.partial_only}%; background: #f7931a;" }
            div { class: "seg remaining", style: "width: {segments.remaining}%; background: #333;" }
        }
    }
}
