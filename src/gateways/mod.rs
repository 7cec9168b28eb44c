pub mod activity_gateway;
pub mod http_api_client;
pub mod submission_gateway;

pub use activity_gateway::ActivityGateway;
pub use http_api_client::HttpApiClient;
pub use submission_gateway::SubmissionGateway;
