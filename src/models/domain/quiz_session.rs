use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    InProgress,
    Submitting,
    Complete,
    Failed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::InProgress => write!(f, "in progress"),
            QuizPhase::Submitting => write!(f, "submitting"),
            QuizPhase::Complete => write!(f, "complete"),
            QuizPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Selected option and elapsed seconds per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    answers: HashMap<i64, String>,
    times: HashMap<i64, u64>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes both mappings for a question that has not been answered yet.
    /// Returns false and leaves the record untouched if an entry already exists.
    pub fn record(&mut self, question_id: i64, option_id: &str, seconds: u64) -> bool {
        if self.answers.contains_key(&question_id) {
            return false;
        }
        self.answers.insert(question_id, option_id.to_string());
        self.times.insert(question_id, seconds);
        true
    }

    /// Overwrites an existing entry. Used only when the last answer is changed
    /// after a failed submission.
    pub fn replace(&mut self, question_id: i64, option_id: &str, seconds: u64) {
        self.answers.insert(question_id, option_id.to_string());
        self.times.insert(question_id, seconds);
    }

    pub fn selected(&self, question_id: i64) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn time_spent(&self, question_id: i64) -> Option<u64> {
        self.times.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: i64) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
        self.times.clear();
    }
}
