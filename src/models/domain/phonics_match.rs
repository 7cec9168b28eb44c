use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::QuestionOption;

static STANDARD_ROUNDS: Lazy<AppResult<Arc<[PhonicsRound]>>> = Lazy::new(|| {
    let rounds: Vec<PhonicsRound> =
        serde_json::from_str(include_str!("../../data/phonics_rounds.json"))?;
    Ok(rounds.into())
});

const MAX_POINTS: u32 = 20;
const MIN_POINTS: u32 = 10;
const POINTS_LOST_PER_ATTEMPT: u32 = 5;
const WRONG_PENALTY: u32 = 2;

/// One "which picture starts with this sound" round.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhonicsRound {
    pub id: i64,
    pub sound: String,
    pub letter: String,
    pub prompt: String,
    pub correct_id: String,
    pub options: Vec<QuestionOption>,
}

impl PhonicsRound {
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Right picture; the round waits for [`PhonicsMatch::advance`].
    Correct { points: u32 },
    Wrong,
    /// A pick while the previous correct answer is still on screen.
    Locked,
    Completed { final_score: u32 },
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhonicsMatch {
    rounds: Arc<[PhonicsRound]>,
    pub round_index: usize,
    pub score: u32,
    /// Picks made in the current round, right or wrong.
    pub attempts: u32,
    pub awaiting_next: bool,
    pub finished: bool,
    pub started_at: DateTime<Utc>,
}

impl PhonicsMatch {
    pub fn new(rounds: Vec<PhonicsRound>, started_at: DateTime<Utc>) -> AppResult<Self> {
        if rounds.is_empty() {
            return Err(AppError::InvalidState(
                "phonics match needs at least one round".to_string(),
            ));
        }
        if let Some(round) = rounds.iter().find(|r| !r.has_option(&r.correct_id)) {
            return Err(AppError::MalformedQuestion(format!(
                "phonics round {} has no option '{}'",
                round.id, round.correct_id
            )));
        }
        Ok(Self::with_rounds(rounds.into(), started_at))
    }

    /// The five built-in rounds: B, M, S, D, C.
    pub fn standard(started_at: DateTime<Utc>) -> AppResult<Self> {
        let rounds = STANDARD_ROUNDS.clone()?;
        Ok(Self::with_rounds(rounds, started_at))
    }

    fn with_rounds(rounds: Arc<[PhonicsRound]>, started_at: DateTime<Utc>) -> Self {
        Self {
            rounds,
            round_index: 0,
            score: 0,
            attempts: 0,
            awaiting_next: false,
            finished: false,
            started_at,
        }
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round(&self) -> Option<&PhonicsRound> {
        if self.finished {
            return None;
        }
        self.rounds.get(self.round_index)
    }

    fn is_last_round(&self) -> bool {
        self.round_index + 1 == self.rounds.len()
    }

    pub fn choose(&mut self, option_id: &str) -> AppResult<MatchOutcome> {
        if self.finished {
            return Ok(MatchOutcome::GameOver);
        }
        if self.awaiting_next {
            return Ok(MatchOutcome::Locked);
        }

        let round = self
            .rounds
            .get(self.round_index)
            .ok_or_else(|| AppError::InvalidState("no round in play".to_string()))?;
        if !round.has_option(option_id) {
            return Err(AppError::InvalidAnswer {
                question_id: round.id,
                option_id: option_id.to_string(),
            });
        }
        let correct = round.correct_id == option_id;

        let earlier_attempts = self.attempts;
        self.attempts += 1;

        if !correct {
            self.score = self.score.saturating_sub(WRONG_PENALTY);
            return Ok(MatchOutcome::Wrong);
        }

        let points = MAX_POINTS
            .saturating_sub(earlier_attempts * POINTS_LOST_PER_ATTEMPT)
            .max(MIN_POINTS);
        self.score += points;

        if self.is_last_round() {
            self.finished = true;
            return Ok(MatchOutcome::Completed {
                final_score: self.score,
            });
        }

        self.awaiting_next = true;
        Ok(MatchOutcome::Correct { points })
    }

    /// Moves past a correctly answered round. Returns the new round index.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.awaiting_next || self.finished {
            return None;
        }
        self.round_index += 1;
        self.attempts = 0;
        self.awaiting_next = false;
        Some(self.round_index)
    }

    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        *self = Self::with_rounds(self.rounds.clone(), started_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PhonicsMatch {
        PhonicsMatch::standard(Utc::now()).expect("built-in rounds load")
    }

    fn wrong_option(game: &PhonicsMatch) -> String {
        let round = game.current_round().expect("round in play");
        round
            .options
            .iter()
            .find(|o| o.id != round.correct_id)
            .map(|o| o.id.clone())
            .expect("round has a wrong option")
    }

    fn correct_option(game: &PhonicsMatch) -> String {
        game.current_round().expect("round in play").correct_id.clone()
    }

    #[test]
    fn standard_game_has_five_rounds_in_order() {
        let game = game();

        assert_eq!(game.round_count(), 5);
        assert_eq!(game.current_round().map(|r| r.letter.as_str()), Some("B"));
        assert_eq!(correct_option(&game), "ball");
    }

    #[test]
    fn first_try_scores_twenty_and_later_tries_score_less() {
        let mut game = game();

        assert_eq!(game.choose("ball"), Ok(MatchOutcome::Correct { points: 20 }));
        game.advance();

        game.choose("fish").expect("valid option");
        assert_eq!(game.choose("moon"), Ok(MatchOutcome::Correct { points: 15 }));
        game.advance();

        game.choose("tree").expect("valid option");
        game.choose("bird").expect("valid option");
        game.choose("tree").expect("valid option");
        assert_eq!(game.choose("snake"), Ok(MatchOutcome::Correct { points: 10 }));
    }

    #[test]
    fn wrong_pick_costs_two_points_floored_at_zero() {
        let mut game = game();

        assert_eq!(game.choose("cat"), Ok(MatchOutcome::Wrong));
        assert_eq!(game.score, 0);

        game.choose("ball").expect("valid option");
        game.advance();
        game.choose("sun").expect("valid option");
        assert_eq!(game.score, 13);
    }

    #[test]
    fn picks_are_locked_until_advance() {
        let mut game = game();
        game.choose("ball").expect("valid option");

        assert_eq!(game.choose("cat"), Ok(MatchOutcome::Locked));
        assert_eq!(game.score, 20);
        assert_eq!(game.round_index, 0);

        assert_eq!(game.advance(), Some(1));
        assert_eq!(game.attempts, 0);
        assert_eq!(game.advance(), None);
    }

    #[test]
    fn last_round_completes_with_total_score() {
        let mut game = game();
        for _ in 0..4 {
            let correct = correct_option(&game);
            game.choose(&correct).expect("valid option");
            game.advance();
        }
        let wrong = wrong_option(&game);
        game.choose(&wrong).expect("valid option");

        let outcome = game.choose("car");

        assert_eq!(outcome, Ok(MatchOutcome::Completed { final_score: 80 - 2 + 15 }));
        assert!(game.finished);
        assert!(game.current_round().is_none());
        assert_eq!(game.choose("car"), Ok(MatchOutcome::GameOver));
    }

    #[test]
    fn unknown_option_is_rejected_without_counting() {
        let mut game = game();

        let err = game.choose("zebra").expect_err("not an option");

        assert!(matches!(err, AppError::InvalidAnswer { question_id: 1, .. }));
        assert_eq!(game.attempts, 0);
    }

    #[test]
    fn reset_starts_over() {
        let mut game = game();
        game.choose("ball").expect("valid option");
        game.advance();

        game.reset(Utc::now());

        assert_eq!(game.round_index, 0);
        assert_eq!(game.score, 0);
        assert!(!game.awaiting_next);
    }

    #[test]
    fn rounds_must_offer_their_answer() {
        let mut round = game().current_round().cloned().expect("round in play");
        round.correct_id = "kite".to_string();

        let result = PhonicsMatch::new(vec![round], Utc::now());

        assert!(matches!(result, Err(AppError::MalformedQuestion(_))));
        assert!(PhonicsMatch::new(vec![], Utc::now()).is_err());
    }
}
