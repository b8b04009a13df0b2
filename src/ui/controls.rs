use dioxus::prelude::*;

use crate::labels::Language;
use crate::progress::SortKey;

const INPUT_STYLE: &str = "background: #16213e; border: 1px solid #555; color: #e0e0e0; padding: 6px 8px; border-radius: 4px; font-family: monospace;";

/// Free-text filter, sort selector and reload button.
#[component]
pub fn Controls(
    filter: String,
    sort: SortKey,
    loading: bool,
    language: Language,
    on_filter: EventHandler<String>,
    on_sort: EventHandler<SortKey>,
    on_reload: EventHandler<()>,
) -> Element {
    let labels = language.labels();

    rsx! {
        div { style: "display: flex; gap: 8px; align-items: center; margin: 12px 0;",
            input {
                style: "{INPUT_STYLE} flex: 1;",
                r#type: "search",
                value: "{filter}",
                placeholder: "{labels.filter_placeholder}",
                oninput: move |evt| on_filter.call(evt.value()),
            }
            label { style: "color: #888; font-size: 12px;", "{labels.sort}" }
            select {
                style: "{INPUT_STYLE}",
                value: "{sort.as_str()}",
                onchange: move |evt| on_sort.call(SortKey::from_key(&evt.value())),
                for key in SortKey::ALL {
                    option {
                        key: "{key.as_str()}",
                        value: "{key.as_str()}",
                        selected: key == sort,
                        "{labels.sort_label(key)}"
                    }
                }
            }
            ReloadButton { loading, language, on_reload }
        }
    }
}

#[component]
pub fn ReloadButton(loading: bool, language: Language, on_reload: EventHandler<()>) -> Element {
    let labels = language.labels();
    let text = if loading { labels.loading } else { labels.reload };

    rsx! {
        button {
            style: "{INPUT_STYLE} cursor: pointer;",
            disabled: loading,
            onclick: move |_| on_reload.call(()),
            "{text}"
        }
    }
}
