pub mod assessment_result;
pub mod letter_hunt;
pub mod phonics_match;
pub mod question;
pub mod question_bank;
pub mod quiz_session;
pub mod session_context;

pub use assessment_result::{AssessmentResult, SkillAnalysis, SkillStatus};
pub use letter_hunt::{LetterHunt, LetterTile, PickOutcome};
pub use phonics_match::{MatchOutcome, PhonicsMatch, PhonicsRound};
pub use question::{Question, QuestionOption, QuestionType, SkillTag};
pub use question_bank::QuestionBank;
pub use quiz_session::{AnswerRecord, QuizPhase};
pub use session_context::SessionContext;
