pub mod activity;
pub mod response;
pub mod submission;

pub use activity::ActivityProgressRequest;
pub use response::{Ack, ApiErrorBody};
pub use submission::{QuestionAnswerDto, SubmissionPayload};
