mod generate;
mod history;
mod quiz_display;

pub use generate::GenerateView;
pub use history::HistoryView;
pub use quiz_display::QuizDisplay;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
