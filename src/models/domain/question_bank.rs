use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::Question;

static PLACEMENT_TEST: Lazy<AppResult<QuestionBank>> =
    Lazy::new(|| QuestionBank::from_json(include_str!("../../data/assessment_questions.json")));

/// Immutable, ordered list of quiz items. Cloning shares the underlying questions.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::EmptyQuestionBank);
        }

        let mut ids = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !ids.insert(question.id) {
                return Err(AppError::MalformedQuestion(format!(
                    "question id {} appears more than once",
                    question.id
                )));
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The fifteen-question onboarding placement test.
    pub fn placement_test() -> AppResult<Self> {
        PLACEMENT_TEST.clone()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, question_id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
