use dioxus::prelude::*;

use crate::labels::Language;
use crate::progress::format::updated_label;

#[component]
pub fn PageHeader(
    title: String,
    updated: Option<String>,
    credit: Option<String>,
    language: Language,
) -> Element {
    let updated_text = updated_label(updated.as_deref(), language.labels());

    rsx! {
        div { style: "margin-bottom: 12px;",
            h1 { style: "color: #f7931a; margin-bottom: 4px;", "{title}" }
            p { style: "color: #888; font-size: 12px; margin: 0;", "{updated_text}" }
            if let Some(credit) = credit {
                p { style: "color: #888; font-size: 12px; margin: 0;", "{credit}" }
            }
        }
    }
}
