pub mod question_view;
pub mod results_view;

pub use question_view::QuestionView;
pub use results_view::{AccuracyBand, NextAction, ResultsView};

const BAR_WIDTH: usize = 20;

/// Fixed-width text bar for a 0..=100 percentage.
pub(crate) fn percent_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
