use quiz_core::model::{QuizHistorySummary, QuizId};

use crate::vm::AppVm;
use crate::vm::time_fmt::format_generated_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub id: QuizId,
    pub title: String,
    pub url: String,
    pub date_label: String,
}

impl From<&QuizHistorySummary> for HistoryRowVm {
    fn from(item: &QuizHistorySummary) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            url: item.url.clone(),
            date_label: format_generated_date(&item.date_generated),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryPanel {
    Loading,
    Error(String),
    Empty,
    Rows(Vec<HistoryRowVm>),
}

#[must_use]
pub fn map_history_panel(vm: &AppVm) -> HistoryPanel {
    if vm.is_loading() {
        return HistoryPanel::Loading;
    }
    if let Some(error) = vm.history_error() {
        return HistoryPanel::Error(error.to_string());
    }
    if vm.history().is_empty() {
        return HistoryPanel::Empty;
    }
    HistoryPanel::Rows(vm.history().iter().map(HistoryRowVm::from).collect())
}
