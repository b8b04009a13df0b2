use serde::Deserialize;

use crate::progress::SortKey;

/// Display language for labels and number grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::It => &ITALIAN,
            Language::En => &ENGLISH,
        }
    }

    /// Thousands separator used by `format_count`.
    pub fn group_separator(self) -> char {
        match self {
            Language::It => '.',
            Language::En => ',',
        }
    }
}

/// Fixed UI text for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub language: Language,
    pub page_title: &'static str,
    pub fallback_project: &'static str,
    pub coverage: &'static str,
    pub completed: &'static str,
    pub remaining: &'static str,
    pub total: &'static str,
    pub updated: &'static str,
    pub error: &'static str,
    pub load_failed: &'static str,
    pub must_contain: &'static str,
    pub filter_placeholder: &'static str,
    pub sort: &'static str,
    pub reload: &'static str,
    pub loading: &'static str,
    pub no_matches: &'static str,
    pub progress_bar: &'static str,
    pub sort_name_asc: &'static str,
    pub sort_range_asc: &'static str,
    pub sort_range_desc: &'static str,
    pub sort_complete_desc: &'static str,
    pub sort_coverage_desc: &'static str,
    pub sort_remaining_asc: &'static str,
}

impl Labels {
    pub fn sort_label(&self, key: SortKey) -> &'static str {
        match key {
            SortKey::NameAsc => self.sort_name_asc,
            SortKey::RangeAsc => self.sort_range_asc,
            SortKey::RangeDesc => self.sort_range_desc,
            SortKey::CompleteDesc => self.sort_complete_desc,
            SortKey::CoverageDesc => self.sort_coverage_desc,
            SortKey::RemainingAsc => self.sort_remaining_asc,
        }
    }
}

static ITALIAN: Labels = Labels {
    language: Language::It,
    page_title: "Progetto di indicizzazione — Paceco",
    fallback_project: "Progetto",
    coverage: "copertura",
    completed: "completati",
    remaining: "rimanenti",
    total: "Totale",
    updated: "Ultimo aggiornamento",
    error: "Errore",
    load_failed: "Impossibile caricare i dati",
    must_contain: "il documento deve contenere",
    filter_placeholder: "Filtra per nome, anni, descrizione…",
    sort: "Ordina",
    reload: "Ricarica",
    loading: "Caricamento…",
    no_matches: "Nessun progetto corrisponde al filtro.",
    progress_bar: "Barra di progresso",
    sort_name_asc: "Nome (A→Z)",
    sort_range_asc: "Anni (crescente)",
    sort_range_desc: "Anni (decrescente)",
    sort_complete_desc: "% completati",
    sort_coverage_desc: "% copertura",
    sort_remaining_asc: "Meno rimanenti",
};

static ENGLISH: Labels = Labels {
    language: Language::En,
    page_title: "Indexing project",
    fallback_project: "Project",
    coverage: "coverage",
    completed: "complete",
    remaining: "remaining",
    total: "Total",
    updated: "Last updated",
    error: "Error",
    load_failed: "Could not load data",
    must_contain: "the document must contain",
    filter_placeholder: "Filter by name, years, description…",
    sort: "Sort",
    reload: "Reload",
    loading: "Loading…",
    no_matches: "No project matches the filter.",
    progress_bar: "Progress bar",
    sort_name_asc: "Name (A→Z)",
    sort_range_asc: "Years (ascending)",
    sort_range_desc: "Years (descending)",
    sort_complete_desc: "% complete",
    sort_coverage_desc: "% coverage",
    sort_remaining_asc: "Least remaining",
};
