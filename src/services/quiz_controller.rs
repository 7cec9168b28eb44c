use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerRecord, AssessmentResult, Question, QuestionBank, QuizPhase, SessionContext},
        dto::SubmissionPayload,
    },
    services::clock::{elapsed_seconds, Clock},
};

/// What an accepted answer led to.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// The last question was answered; the payload must now be sent.
    ReadyToSubmit(SubmissionPayload),
}

/// Synchronous state machine for one pass through the question bank.
///
/// ```text
/// in_progress --answer (not last)--> in_progress
/// in_progress --answer (last)------> submitting --success--> complete
///                                    submitting --failure--> failed --> in_progress
/// ```
///
/// The controller never performs I/O. Whoever drives it sends the payload
/// returned by [`QuizController::answer`] and reports back through
/// [`QuizController::complete_submission`] or [`QuizController::fail_submission`].
pub struct QuizController {
    session_id: Uuid,
    bank: QuestionBank,
    context: SessionContext,
    clock: Arc<dyn Clock>,
    current_index: usize,
    record: AnswerRecord,
    phase: QuizPhase,
    shown_at: DateTime<Utc>,
    submission_attempts: u32,
    last_error: Option<String>,
    result: Option<AssessmentResult>,
}

impl QuizController {
    /// Creates a controller with a fresh session already started.
    pub fn new(bank: QuestionBank, context: SessionContext, clock: Arc<dyn Clock>) -> Self {
        let shown_at = clock.now();
        let controller = Self {
            session_id: Uuid::new_v4(),
            bank,
            context,
            clock,
            current_index: 0,
            record: AnswerRecord::new(),
            phase: QuizPhase::InProgress,
            shown_at,
            submission_attempts: 0,
            last_error: None,
            result: None,
        };
        log::info!(
            "Quiz session {} started for child {} with {} questions",
            controller.session_id,
            controller.context.child_id,
            controller.bank.len()
        );
        controller
    }

    pub fn from_questions(
        questions: Vec<Question>,
        context: SessionContext,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let bank = QuestionBank::new(questions)?;
        Ok(Self::new(bank, context, clock))
    }

    /// Discards everything and begins again at the first question.
    pub fn start(&mut self) {
        self.session_id = Uuid::new_v4();
        self.current_index = 0;
        self.record.clear();
        self.phase = QuizPhase::InProgress;
        self.shown_at = self.clock.now();
        self.submission_attempts = 0;
        self.last_error = None;
        self.result = None;
        log::info!(
            "Quiz session {} restarted for child {}",
            self.session_id,
            self.context.child_id
        );
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen, if one is being shown.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.bank.get(self.current_index),
            _ => None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Share of the quiz already behind the user, 0..100.
    pub fn progress_percent(&self) -> u8 {
        ((self.current_index * 100) / self.bank.len()) as u8
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.context
    }

    pub fn submission_attempts(&self) -> u32 {
        self.submission_attempts
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    fn is_last(&self) -> bool {
        self.current_index == self.bank.last_index()
    }

    fn set_phase(&mut self, next: QuizPhase) {
        log::info!(
            "Quiz session {}: {} -> {}",
            self.session_id,
            self.phase,
            next
        );
        self.phase = next;
    }

    fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::from_record(self.context.child_id, &self.bank, &self.record)
    }

    fn begin_submission(&mut self) -> SubmissionPayload {
        self.set_phase(QuizPhase::Submitting);
        self.submission_attempts += 1;
        self.last_error = None;
        self.payload()
    }

    /// Records `option_id` for the current question.
    ///
    /// Rejected with [`AppError::InvalidAnswer`] when the id is not one of the
    /// current question's options, and with [`AppError::NotAcceptingAnswers`]
    /// outside `in_progress`. A rejected call changes nothing.
    pub fn answer(&mut self, option_id: &str) -> AppResult<AnswerOutcome> {
        if self.phase != QuizPhase::InProgress {
            log::warn!(
                "Quiz session {}: answer '{}' ignored while {}",
                self.session_id,
                option_id,
                self.phase
            );
            return Err(AppError::NotAcceptingAnswers(self.phase));
        }

        let question = self
            .bank
            .get(self.current_index)
            .ok_or_else(|| AppError::InvalidState("cursor is past the last question".to_string()))?;
        let question_id = question.id;

        if !question.has_option(option_id) {
            log::warn!(
                "Quiz session {}: option '{}' is not part of question {}",
                self.session_id,
                option_id,
                question_id
            );
            return Err(AppError::InvalidAnswer {
                question_id,
                option_id: option_id.to_string(),
            });
        }

        let now = self.clock.now();
        let seconds = elapsed_seconds(self.shown_at, now);

        if !self.record.record(question_id, option_id, seconds) {
            // Only the last question can already be recorded: a retry after a
            // failed submission. Same choice keeps the first timing.
            if self.record.selected(question_id) != Some(option_id) {
                self.record.replace(question_id, option_id, seconds);
            }
        }
        log::debug!(
            "Quiz session {}: question {} answered '{}' in {}s",
            self.session_id,
            question_id,
            option_id,
            seconds
        );

        if self.is_last() {
            return Ok(AnswerOutcome::ReadyToSubmit(self.begin_submission()));
        }

        self.current_index += 1;
        self.shown_at = now;
        Ok(AnswerOutcome::Advanced {
            index: self.current_index,
        })
    }

    /// Sends the retained answers again after a failure, without re-answering.
    pub fn retry_submission(&mut self) -> AppResult<SubmissionPayload> {
        if self.phase != QuizPhase::InProgress {
            return Err(AppError::NotAcceptingAnswers(self.phase));
        }

        let answered_all = self.is_last() && self.record.len() == self.bank.len();
        if !answered_all {
            return Err(AppError::InvalidState(
                "there is no failed submission to retry".to_string(),
            ));
        }

        log::info!(
            "Quiz session {}: retrying submission (attempt {})",
            self.session_id,
            self.submission_attempts + 1
        );
        Ok(self.begin_submission())
    }

    pub fn complete_submission(&mut self, result: AssessmentResult) -> AppResult<()> {
        if self.phase != QuizPhase::Submitting {
            return Err(AppError::InvalidState(format!(
                "cannot complete a submission while {}",
                self.phase
            )));
        }

        log::info!(
            "Quiz session {}: assigned level {} at {}% accuracy",
            self.session_id,
            result.level,
            result.accuracy
        );
        self.result = Some(result);
        self.set_phase(QuizPhase::Complete);
        Ok(())
    }

    /// Records the failure and reopens the last question for another try.
    /// Answers already recorded are kept.
    pub fn fail_submission(&mut self, error: &AppError) -> AppResult<()> {
        if self.phase != QuizPhase::Submitting {
            return Err(AppError::InvalidState(format!(
                "cannot fail a submission while {}",
                self.phase
            )));
        }

        log::warn!(
            "Quiz session {}: submission attempt {} failed: {}",
            self.session_id,
            self.submission_attempts,
            error
        );
        self.set_phase(QuizPhase::Failed);
        self.last_error = Some(error.to_string());
        self.current_index = self.bank.last_index();
        self.shown_at = self.clock.now();
        self.set_phase(QuizPhase::InProgress);
        Ok(())
    }

    /// Hands the result over to the results view and drops the session's answers.
    pub fn take_result(&mut self) -> Option<AssessmentResult> {
        let result = self.result.take();
        if result.is_some() {
            self.record.clear();
        }
        result
    }
}
