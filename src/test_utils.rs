#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        AssessmentResult, Question, QuestionBank, QuestionOption, QuestionType, SessionContext,
        SkillAnalysis, SkillStatus, SkillTag,
    };

    fn option(id: &str, text: &str) -> QuestionOption {
        QuestionOption {
            id: id.to_string(),
            text: text.to_string(),
            label: None,
        }
    }

    fn question(id: i64, skill: SkillTag, options: &[(&str, &str)], correct_id: &str) -> Question {
        Question {
            id,
            question_type: QuestionType::MultipleChoice,
            prompt: format!("Question {}", id),
            options: options.iter().map(|(id, text)| option(id, text)).collect(),
            correct_id: correct_id.to_string(),
            skill,
        }
    }

    /// Three multiple-choice questions with ids 1..=3, correct answers A, B, C.
    pub fn three_question_bank() -> QuestionBank {
        QuestionBank::new(vec![
            question(
                1,
                SkillTag::LetterRecognition,
                &[("optA", "Apple"), ("optB", "Ball"), ("optC", "Cat")],
                "optA",
            ),
            question(
                2,
                SkillTag::Rhyming,
                &[("optA", "Apple"), ("optB", "Bat"), ("optC", "Car")],
                "optB",
            ),
            question(
                3,
                SkillTag::Phonics,
                &[("optA", "Sun"), ("optB", "Moon"), ("optC", "Cup")],
                "optC",
            ),
        ])
        .expect("fixture bank is valid")
    }

    pub fn single_question_bank() -> QuestionBank {
        QuestionBank::new(vec![question(
            1,
            SkillTag::Grammar,
            &[("yes", "Yes"), ("no", "No")],
            "yes",
        )])
        .expect("fixture bank is valid")
    }

    pub fn test_context() -> SessionContext {
        SessionContext::new(7).expect("fixture context is valid")
    }

    pub fn sample_result() -> AssessmentResult {
        AssessmentResult {
            level: "Intermediate".to_string(),
            accuracy: 66.7,
            message: "Assessment Complete! Assigned Level: Intermediate".to_string(),
            plan_id: Some(3),
            skill_analysis: vec![
                SkillAnalysis {
                    skill_name: "Letter Recognition".to_string(),
                    total_questions: 1,
                    correct_answers: 1,
                    mastery_percentage: 100,
                    status: SkillStatus::Mastered,
                    avg_time_seconds: 4.0,
                    strengths: vec!["Uppercase letters".to_string()],
                    weaknesses: vec![],
                },
                SkillAnalysis {
                    skill_name: "Phonics".to_string(),
                    total_questions: 2,
                    correct_answers: 1,
                    mastery_percentage: 50,
                    status: SkillStatus::NeedsWork,
                    avg_time_seconds: 7.5,
                    strengths: vec![],
                    weaknesses: vec!["Beginning sounds".to_string()],
                },
            ],
            strengths: vec!["Letter Recognition".to_string()],
            weaknesses: vec!["Phonics".to_string()],
            recommendations: vec!["Practice beginning sounds with picture cards".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_three_question_bank() {
        let bank = three_question_bank();

        assert_eq!(bank.len(), 3);
        let correct: Vec<&str> = bank.iter().map(|q| q.correct_id.as_str()).collect();
        assert_eq!(correct, vec!["optA", "optB", "optC"]);
    }

    #[test]
    fn test_fixtures_single_question_bank() {
        let bank = single_question_bank();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.last_index(), 0);
    }

    #[test]
    fn test_fixtures_sample_result() {
        let result = sample_result();

        assert_eq!(result.level, "Intermediate");
        assert_eq!(result.skill_analysis.len(), 2);
    }
}
