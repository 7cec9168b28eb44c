use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    gateways::HttpApiClient,
    models::domain::{QuestionBank, SessionContext},
    services::{
        AssessmentService, Clock, LetterHuntService, PhonicsMatchService, QuizController,
        SystemClock,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub assessment_service: Arc<AssessmentService>,
    pub letter_hunt_service: Arc<LetterHuntService>,
    pub phonics_match_service: Arc<PhonicsMatchService>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let api_client = Arc::new(HttpApiClient::new(&config)?);

        let assessment_service = Arc::new(AssessmentService::new(
            api_client.clone(),
            config.submit_timeout(),
        ));
        let letter_hunt_service = Arc::new(LetterHuntService::new(api_client.clone(), clock.clone()));
        let phonics_match_service = Arc::new(PhonicsMatchService::new(api_client, clock.clone()));

        Ok(Self {
            assessment_service,
            letter_hunt_service,
            phonics_match_service,
            clock,
            config: Arc::new(config),
        })
    }

    /// A fresh placement test for the given child, already started.
    pub fn new_assessment(&self, context: SessionContext) -> AppResult<QuizController> {
        let bank = QuestionBank::placement_test()?;
        let mut controller = QuizController::new(bank, context, self.clock.clone());
        controller.start();
        Ok(controller)
    }
}
