use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
    pub correct_id: String,
    pub skill: SkillTag,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Only changes how options are laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    ImageChoice,
}

/// Reading sub-skill a question checks. Interpreted by the server-side analyzer only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTag {
    LetterRecognition,
    Phonics,
    Rhyming,
    Grammar,
    ReadingFluency,
}

impl SkillTag {
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillTag::LetterRecognition => "Letter Recognition",
            SkillTag::Phonics => "Phonics",
            SkillTag::Rhyming => "Rhyming",
            SkillTag::Grammar => "Grammar",
            SkillTag::ReadingFluency => "Reading Fluency",
        }
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.option(option_id).is_some()
    }

    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.option(&self.correct_id)
    }

    /// Checks the structural invariants: at least one option, unique option ids,
    /// and `correct_id` naming exactly one of them.
    pub fn validate(&self) -> AppResult<()> {
        if self.options.is_empty() {
            return Err(AppError::MalformedQuestion(format!(
                "question {} has no options",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(AppError::MalformedQuestion(format!(
                    "question {} repeats option id '{}'",
                    self.id, option.id
                )));
            }
        }

        if !seen.contains(self.correct_id.as_str()) {
            return Err(AppError::MalformedQuestion(format!(
                "question {} has correct id '{}' that matches no option",
                self.id, self.correct_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_question() -> Question {
        Question {
            id: 2,
            question_type: QuestionType::MultipleChoice,
            prompt: "Find the letter \"B\"".to_string(),
            options: vec![
                QuestionOption {
                    id: "d".to_string(),
                    text: "D".to_string(),
                    label: None,
                },
                QuestionOption {
                    id: "b".to_string(),
                    text: "B".to_string(),
                    label: None,
                },
            ],
            correct_id: "b".to_string(),
            skill: SkillTag::LetterRecognition,
        }
    }

    #[test]
    fn question_deserializes_from_bank_format() {
        let json = r#"{
            "id": 5,
            "type": "image-choice",
            "prompt": "Tap picture that starts with \"M\".",
            "options": [
                { "id": "moon", "text": "🌙", "label": "Moon" },
                { "id": "sun", "text": "☀️", "label": "Sun" }
            ],
            "correct_id": "moon",
            "skill": "phonics"
        }"#;

        let question: Question = serde_json::from_str(json).expect("question should parse");

        assert_eq!(question.question_type, QuestionType::ImageChoice);
        assert_eq!(question.skill, SkillTag::Phonics);
        assert_eq!(question.options[0].label.as_deref(), Some("Moon"));
        assert!(question.validate().is_ok());
    }

    #[test]
    fn question_rejects_unknown_skill_tag() {
        let json = r#"{"id":1,"type":"multiple-choice","prompt":"p","options":[{"id":"a","text":"A"}],"correct_id":"a","skill":"spelling"}"#;

        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn option_lookup_and_correct_option() {
        let question = letter_question();

        assert!(question.has_option("d"));
        assert!(!question.has_option("p"));
        assert_eq!(question.correct_option().map(|o| o.text.as_str()), Some("B"));
    }

    #[test]
    fn validate_rejects_question_without_options() {
        let mut question = letter_question();
        question.options.clear();

        assert!(matches!(
            question.validate(),
            Err(AppError::MalformedQuestion(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_option_ids() {
        let mut question = letter_question();
        question.options[0].id = "b".to_string();

        assert!(matches!(
            question.validate(),
            Err(AppError::MalformedQuestion(msg)) if msg.contains("repeats")
        ));
    }

    #[test]
    fn validate_rejects_dangling_correct_id() {
        let mut question = letter_question();
        question.correct_id = "p".to_string();

        assert!(question.validate().is_err());
    }

    #[test]
    fn skill_tag_display_names() {
        assert_eq!(SkillTag::LetterRecognition.to_string(), "Letter Recognition");
        assert_eq!(SkillTag::ReadingFluency.display_name(), "Reading Fluency");
    }
}
