use tracing::{debug, warn};

use crate::labels::Labels;
use crate::loader::LoadRequest;
use crate::progress::{NormalizedProject, SortKey, filter_projects, sort_projects};
use crate::source::{Board, LoadError};

/// What the page currently shows in place of the board.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready(Board),
    Failed(String),
}

/// The whole UI state. Rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub status: LoadStatus,
    pub sort: SortKey,
    pub filter: String,
    /// A fetch is in flight.
    pub loading: bool,
}

/// User and loader events, applied in order on the UI thread.
#[derive(Debug)]
pub enum Msg {
    SetFilter(String),
    SetSort(SortKey),
    Reload,
    Loaded(Result<Board, LoadError>),
}

impl ViewState {
    /// Initial state; the first fetch is already requested.
    pub fn new(sort: SortKey) -> Self {
        Self {
            status: LoadStatus::Loading,
            sort,
            filter: String::new(),
            loading: true,
        }
    }

    /// Apply one message. Returns a request for the loader when one is needed.
    pub fn update(&mut self, msg: Msg, labels: &Labels) -> Option<LoadRequest> {
        match msg {
            Msg::SetFilter(text) => {
                self.filter = text;
                None
            }
            Msg::SetSort(key) => {
                self.sort = key;
                if let LoadStatus::Ready(Board::Portfolio(p)) = &mut self.status {
                    sort_projects(&mut p.projects, key);
                }
                None
            }
            Msg::Reload => {
                if self.loading {
                    debug!("Reload ignored, fetch already in flight");
                    return None;
                }
                self.loading = true;
                Some(LoadRequest::Fetch)
            }
            Msg::Loaded(Ok(mut board)) => {
                self.loading = false;
                if let Board::Portfolio(p) = &mut board {
                    sort_projects(&mut p.projects, self.sort);
                }
                self.status = LoadStatus::Ready(board);
                None
            }
            Msg::Loaded(Err(e)) => {
                self.loading = false;
                warn!("Load failed: {e}");
                self.status = LoadStatus::Failed(e.message(labels));
                None
            }
        }
    }

    /// Projects passing the filter, in the current sort order.
    pub fn visible(&self) -> Vec<&NormalizedProject> {
        match &self.status {
            LoadStatus::Ready(Board::Portfolio(p)) => filter_projects(&p.projects, &self.filter),
            _ => Vec::new(),
        }
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.status {
            LoadStatus::Ready(board) => Some(board),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Language;
    use crate::source::{Document, SchemaError};
    use serde_json::json;

    fn labels() -> &'static Labels {
        Language::It.labels()
    }

    fn board() -> Board {
        let doc = Document::from_value(json!({
            "title": "Paceco",
            "projects": [
                {"title": "Morti", "range": "1744-1800", "total": 100, "partial": 50, "complete": 10},
                {"title": "Battesimi", "range": "1682-1743", "total": 200, "partial": 200, "complete": 150},
                {"title": "Cresime", "range": "?", "total": 40, "partial": 0, "complete": 0},
            ]
        }))
        .unwrap();
        Board::from_document(doc, labels())
    }

    fn titles(state: &ViewState) -> Vec<&str> {
        state.visible().iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn loaded_board_is_sorted_with_current_key() {
        let mut state = ViewState::new(SortKey::RangeAsc);
        assert!(state.loading);
        assert!(state.visible().is_empty());

        state.update(Msg::Loaded(Ok(board())), labels());
        assert!(!state.loading);
        assert_eq!(titles(&state), vec!["Battesimi", "Morti", "Cresime"]);
    }

    #[test]
    fn sort_and_filter_messages() {
        let mut state = ViewState::new(SortKey::RangeAsc);
        state.update(Msg::Loaded(Ok(board())), labels());

        state.update(Msg::SetSort(SortKey::NameAsc), labels());
        assert_eq!(titles(&state), vec!["Battesimi", "Cresime", "Morti"]);

        state.update(Msg::SetFilter("MOR".into()), labels());
        assert_eq!(titles(&state), vec!["Morti"]);

        state.update(Msg::SetFilter("nessuno".into()), labels());
        assert!(titles(&state).is_empty());

        state.update(Msg::SetFilter(String::new()), labels());
        assert_eq!(titles(&state).len(), 3);
    }

    #[test]
    fn failure_shows_single_message_and_no_records() {
        let mut state = ViewState::new(SortKey::RangeAsc);
        state.update(Msg::Loaded(Ok(board())), labels());
        state.update(Msg::Reload, labels());
        state.update(
            Msg::Loaded(Err(LoadError::Schema(SchemaError::ExpectedPortfolio))),
            labels(),
        );
        assert!(state.board().is_none());
        assert!(state.visible().is_empty());
        assert_eq!(
            state.status,
            LoadStatus::Failed(
                "il documento deve contenere: { title, updated, credit, projects: [...] }".into()
            )
        );
    }

    #[test]
    fn reload_does_not_overlap() {
        let mut state = ViewState::new(SortKey::RangeAsc);
        // initial fetch still in flight
        assert_eq!(state.update(Msg::Reload, labels()), None);

        state.update(Msg::Loaded(Err(LoadError::Status(500))), labels());
        assert_eq!(
            state.status,
            LoadStatus::Failed("Impossibile caricare i dati (HTTP 500)".into())
        );
        assert_eq!(state.update(Msg::Reload, labels()), Some(LoadRequest::Fetch));
        assert!(state.loading);
        assert_eq!(state.update(Msg::Reload, labels()), None);
    }
}
