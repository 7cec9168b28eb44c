use crate::{
    models::domain::{Question, QuestionType},
    services::QuizController,
    views::percent_bar,
};

/// Text rendering of one quiz item. Emits at most one selection; a second
/// click on the same screen is swallowed so it cannot double-record.
pub struct QuestionView<'a> {
    question: &'a Question,
    position: usize,
    total: usize,
    selected: Option<String>,
}

impl<'a> QuestionView<'a> {
    /// `position` is zero-based.
    pub fn new(question: &'a Question, position: usize, total: usize) -> Self {
        Self {
            question,
            position,
            total,
            selected: None,
        }
    }

    /// The view for the controller's current question, if one is on screen.
    pub fn for_controller(controller: &'a QuizController) -> Option<Self> {
        controller.current_question().map(|question| {
            Self::new(
                question,
                controller.current_index(),
                controller.question_count(),
            )
        })
    }

    pub fn question(&self) -> &Question {
        self.question
    }

    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }

    pub fn render(&self) -> String {
        let percent = if self.total == 0 {
            0
        } else {
            (self.position * 100 / self.total) as u32
        };

        let mut lines = vec![
            format!(
                "Question {} of {}  {}",
                self.position + 1,
                self.total,
                percent_bar(percent)
            ),
            String::new(),
            self.question.prompt.clone(),
            String::new(),
        ];

        let numbered = self.question.options.iter().enumerate();
        match self.question.question_type {
            QuestionType::MultipleChoice => {
                lines.extend(
                    numbered.map(|(number, option)| format!("  {}. {}", number + 1, option.text)),
                );
            }
            QuestionType::ImageChoice => {
                let row: Vec<String> = numbered
                    .map(|(number, option)| match &option.label {
                        Some(label) => format!("[{}] {} {}", number + 1, option.text, label),
                        None => format!("[{}] {}", number + 1, option.text),
                    })
                    .collect();
                lines.push(format!("  {}", row.join("   ")));
            }
        }

        lines.join("\n") + "\n"
    }

    /// Latches the first valid selection and returns its option id.
    pub fn select(&mut self, option_id: &str) -> Option<String> {
        if self.is_locked() || !self.question.has_option(option_id) {
            return None;
        }
        self.selected = Some(option_id.to_string());
        self.selected.clone()
    }

    /// Selection by the 1-based number shown next to each option.
    pub fn select_by_number(&mut self, number: usize) -> Option<String> {
        let option_id = self
            .question
            .options
            .get(number.checked_sub(1)?)
            .map(|option| option.id.clone())?;
        self.select(&option_id)
    }

    /// Accepts either an option number or a raw option id.
    pub fn select_input(&mut self, input: &str) -> Option<String> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(number) => self.select_by_number(number),
            Err(_) => self.select(input),
        }
    }
}
