use crate::{
    models::domain::{AssessmentResult, SkillAnalysis, SkillStatus},
    views::percent_bar,
};

/// Where the single button on the results screen leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    StartAssessment,
    Dashboard,
}

impl NextAction {
    pub fn label(&self) -> &'static str {
        match self {
            NextAction::StartAssessment => "Start Assessment",
            NextAction::Dashboard => "Go to Dashboard",
        }
    }

    /// True when following this action re-enters the quiz flow.
    pub fn restarts_quiz(&self) -> bool {
        matches!(self, NextAction::StartAssessment)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
}

impl AccuracyBand {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 75.0 {
            AccuracyBand::High
        } else if accuracy >= 50.0 {
            AccuracyBand::Medium
        } else {
            AccuracyBand::Low
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            AccuracyBand::High => "(+)",
            AccuracyBand::Medium => "(~)",
            AccuracyBand::Low => "(-)",
        }
    }
}

pub struct ResultsView;

impl ResultsView {
    pub fn next_action(result: Option<&AssessmentResult>) -> NextAction {
        match result {
            Some(_) => NextAction::Dashboard,
            None => NextAction::StartAssessment,
        }
    }

    pub fn render(result: Option<&AssessmentResult>) -> String {
        let mut lines = match result {
            Some(result) => report_lines(result),
            None => vec![
                "No Results Found".to_string(),
                "Please complete the assessment first.".to_string(),
            ],
        };
        lines.push(String::new());
        lines.push(format!("[ {} ]", Self::next_action(result).label()));
        lines.join("\n") + "\n"
    }
}

fn report_lines(result: &AssessmentResult) -> Vec<String> {
    let mut lines = vec!["Assessment Complete!".to_string()];
    if !result.message.is_empty() {
        lines.push(result.message.clone());
    }
    lines.push(String::new());
    lines.push(format!("Level: {}", result.level));
    lines.push(format!(
        "Accuracy: {}% {}",
        result.accuracy,
        AccuracyBand::from_accuracy(result.accuracy).marker()
    ));

    if !result.skill_analysis.is_empty() {
        lines.push(String::new());
        lines.push("Skill Breakdown".to_string());
        for skill in &result.skill_analysis {
            lines.extend(skill_lines(skill));
        }
    }

    if !result.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Personalized Recommendations".to_string());
        lines.extend(
            result
                .recommendations
                .iter()
                .enumerate()
                .map(|(number, recommendation)| format!("  {}. {}", number + 1, recommendation)),
        );
    }

    lines
}

fn skill_lines(skill: &SkillAnalysis) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("  {} [{}]", skill.skill_name, status_badge(skill.status)),
        format!(
            "    {}/{} correct, {}s avg",
            skill.correct_answers, skill.total_questions, skill.avg_time_seconds
        ),
        format!(
            "    {} {}%",
            percent_bar(skill.mastery_percentage),
            skill.mastery_percentage
        ),
    ];

    if !skill.strengths.is_empty() {
        lines.push("    Strengths".to_string());
        lines.extend(skill.strengths.iter().map(|s| format!("      • {}", s)));
    }
    if !skill.weaknesses.is_empty() {
        lines.push("    To Improve".to_string());
        lines.extend(skill.weaknesses.iter().map(|w| format!("      • {}", w)));
    }

    lines
}

fn status_badge(status: SkillStatus) -> String {
    match status {
        SkillStatus::Mastered => format!("* {}", status.label()),
        SkillStatus::Learning => format!("^ {}", status.label()),
        SkillStatus::NeedsWork => format!("o {}", status.label()),
        SkillStatus::Unknown => status.label().to_string(),
    }
}
