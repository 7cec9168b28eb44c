pub mod assessment_service;
pub mod clock;
pub mod letter_hunt_service;
pub mod phonics_match_service;
pub mod quiz_controller;

pub use assessment_service::{AssessmentService, SubmissionOutcome};
pub use clock::{Clock, ManualClock, SystemClock};
pub use letter_hunt_service::LetterHuntService;
pub use phonics_match_service::PhonicsMatchService;
pub use quiz_controller::{AnswerOutcome, QuizController};
