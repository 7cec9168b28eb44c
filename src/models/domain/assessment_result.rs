use serde::{Deserialize, Serialize};

/// Server-computed outcome of a submitted placement test. The quiz flow
/// passes it through untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssessmentResult {
    pub level: String,
    pub accuracy: f64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub skill_analysis: Vec<SkillAnalysis>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillAnalysis {
    pub skill_name: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub mastery_percentage: u32,
    pub status: SkillStatus,
    pub avg_time_seconds: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SkillStatus {
    Mastered,
    Learning,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(other)]
    Unknown,
}

impl SkillStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SkillStatus::Mastered => "Mastered",
            SkillStatus::Learning => "Learning",
            SkillStatus::NeedsWork => "Needs Work",
            SkillStatus::Unknown => "Unrated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_parses_backend_response() {
        let json = r#"{
            "level": "Intermediate",
            "accuracy": 73.3,
            "message": "Assessment Complete! Assigned Level: Intermediate",
            "plan_id": 12,
            "skill_analysis": [{
                "skill_name": "Phonics",
                "total_questions": 4,
                "correct_answers": 3,
                "mastery_percentage": 75,
                "status": "Needs Work",
                "avg_time_seconds": 4.5,
                "strengths": [],
                "weaknesses": ["Beginning sounds"]
            }],
            "strengths": ["Letter names"],
            "weaknesses": ["Beginning sounds"],
            "recommendations": ["Play phonics games for 15 minutes daily"]
        }"#;

        let result: AssessmentResult = serde_json::from_str(json).expect("result should parse");

        assert_eq!(result.level, "Intermediate");
        assert_eq!(result.plan_id, Some(12));
        assert_eq!(result.skill_analysis[0].status, SkillStatus::NeedsWork);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn result_tolerates_missing_optional_sections() {
        let result: AssessmentResult =
            serde_json::from_str(r#"{"level":"Beginner","accuracy":20.0}"#)
                .expect("minimal result should parse");

        assert!(result.skill_analysis.is_empty());
        assert!(result.message.is_empty());
        assert!(result.plan_id.is_none());
    }

    #[test]
    fn unknown_skill_status_is_not_an_error() {
        let status: SkillStatus =
            serde_json::from_str("\"Emerging\"").expect("unknown status should map");

        assert_eq!(status, SkillStatus::Unknown);
        assert_eq!(status.label(), "Unrated");
    }
}
