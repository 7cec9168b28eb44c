use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AnswerRecord, QuestionBank};

/// Body of `POST /assessments/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct SubmissionPayload {
    #[validate(range(min = 1))]
    pub child_id: i64,

    #[validate(length(min = 1))]
    pub answers: Vec<QuestionAnswerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionAnswerDto {
    pub question_id: i64,
    #[serde(rename = "question_content")]
    pub question_prompt: String,
    #[serde(rename = "selected_answer")]
    pub selected_option_text: String,
    #[serde(rename = "correct_answer")]
    pub correct_option_text: String,
    #[serde(rename = "time_spent")]
    pub time_spent_seconds: u64,
}

impl SubmissionPayload {
    /// Resolves recorded option ids back to display text, in bank order.
    /// An id that matches no option is sent as-is.
    pub fn from_record(child_id: i64, bank: &QuestionBank, record: &AnswerRecord) -> Self {
        let answers = bank
            .iter()
            .map(|question| {
                let selected = record.selected(question.id).unwrap_or_default();
                let selected_option_text = question
                    .option(selected)
                    .map(|o| o.text.clone())
                    .unwrap_or_else(|| selected.to_string());
                let correct_option_text = question
                    .correct_option()
                    .map(|o| o.text.clone())
                    .unwrap_or_else(|| question.correct_id.clone());

                QuestionAnswerDto {
                    question_id: question.id,
                    question_prompt: question.prompt.clone(),
                    selected_option_text,
                    correct_option_text,
                    time_spent_seconds: record.time_spent(question.id).unwrap_or(0),
                }
            })
            .collect();

        Self { child_id, answers }
    }
}
