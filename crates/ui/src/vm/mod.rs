mod app_vm;
mod history_vm;
mod quiz_vm;
mod time_fmt;

pub use app_vm::{ActiveQuiz, AppVm, RequestKind, RequestTicket};
pub use history_vm::{HistoryPanel, HistoryRowVm, map_history_panel};
pub use quiz_vm::{
    EMPTY_ENTITY_LABEL, OptionTone, OptionVm, QuestionVm, QuizDisplayVm, QuizPanel,
    map_quiz_display, map_quiz_panel,
};
pub use time_fmt::format_generated_date;
