pub mod controls;
pub mod header;
pub mod project;
pub mod summary;

use dioxus::prelude::*;

use crate::labels::Language;
use crate::progress::SortKey;
use crate::source::Board;
use crate::view::{LoadStatus, Msg, ViewState};

/// Root UI component.
#[component]
pub fn App() -> Element {
    let config = crate::get_config();
    let language = config.ui.language;
    let labels = language.labels();
    let fallback_title = config.ui.fallback_title().to_string();

    let mut state = use_signal(|| ViewState::new(config.ui.sort_key()));
    let requests = use_hook(crate::take_request_tx);

    // Apply loader outcomes as they arrive
    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let Some(mut rx) = crate::take_outcome_rx() else {
            tracing::error!("Failed to take loader outcome receiver");
            return;
        };

        tracing::info!("UI coroutine started, listening for loader output");

        while let Some(outcome) = rx.recv().await {
            state.write().update(Msg::Loaded(outcome.into_result()), labels);
        }
    });

    let reload = use_callback(move |_: ()| {
        let request = state.write().update(Msg::Reload, labels);
        if let (Some(request), Some(tx)) = (request, requests.as_ref()) {
            tracing::info!("Reload requested");
            if tx.send(request).is_err() {
                tracing::error!("Loader channel closed");
            }
        }
    });

    let view = state.read();
    let title = match view.board() {
        Some(Board::Portfolio(p)) => p.title.clone().unwrap_or(fallback_title),
        _ => fallback_title,
    };
    let updated = view.board().and_then(|b| b.updated()).map(str::to_string);
    let credit = match view.board() {
        Some(Board::Portfolio(p)) => p.credit.clone(),
        _ => None,
    };

    let body = match &view.status {
        LoadStatus::Loading => rsx! {
            p { style: "color: #666;", "{labels.loading}" }
        },
        LoadStatus::Failed(message) => rsx! {
            ErrorBanner { message: message.clone(), language }
            controls::ReloadButton { loading: view.loading, language, on_reload: reload }
        },
        LoadStatus::Ready(Board::SingleMetric(metric)) => rsx! {
            summary::SingleMetricPanel { metric: metric.clone(), language }
            controls::ReloadButton { loading: view.loading, language, on_reload: reload }
        },
        LoadStatus::Ready(Board::Portfolio(portfolio)) => rsx! {
            summary::OverallSummary { aggregate: portfolio.aggregate, language }
            controls::Controls {
                filter: view.filter.clone(),
                sort: view.sort,
                loading: view.loading,
                language,
                on_filter: move |text: String| {
                    state.write().update(Msg::SetFilter(text), labels);
                },
                on_sort: move |key: SortKey| {
                    state.write().update(Msg::SetSort(key), labels);
                },
                on_reload: reload,
            }
            project::ProjectList { projects: view.visible().into_iter().cloned().collect(), language }
        },
    };

    rsx! {
        div { class: "app",
            style: "font-family: monospace; background: #1a1a2e; color: #e0e0e0; min-height: 100vh; padding: 16px;",

            header::PageHeader { title, updated, credit, language }

            {body}
        }
    }
}

#[component]
fn ErrorBanner(message: String, language: Language) -> Element {
    let labels = language.labels();
    rsx! {
        div {
            style: "background: #3a0000; border-left: 3px solid #ff5555; padding: 12px; margin: 12px 0; border-radius: 4px;",
            strong { "{labels.error}:" }
            " {message}"
        }
    }
}
