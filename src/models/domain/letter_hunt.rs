use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Early-learning letters; visually confusing ones are left out.
pub const LETTER_POOL: &str = "ABCDEFGHILMNOPRSTUVW";
pub const TARGET_COUNT: usize = 5;
pub const DISTRACTOR_COUNT: usize = 11;

const FOUND_POINTS: u32 = 10;
const MISS_PENALTY: u32 = 2;
const MAX_TIME_BONUS: i64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub id: usize,
    pub letter: char,
    pub is_target: bool,
    pub found: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Found { remaining: usize },
    Miss,
    AlreadyFound,
    Won { final_score: u32 },
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterHunt {
    pub target: char,
    pub tiles: Vec<LetterTile>,
    pub score: u32,
    pub started_at: DateTime<Utc>,
    pub finished: bool,
}

impl LetterHunt {
    /// Deals a new board. All randomness comes from `rng`, so a seeded
    /// generator reproduces the same board.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, started_at: DateTime<Utc>) -> Self {
        let pool: Vec<char> = LETTER_POOL.chars().collect();
        let target = pool[rng.gen_range(0..pool.len())];
        let distractors: Vec<char> = pool.iter().copied().filter(|c| *c != target).collect();

        let mut tiles: Vec<LetterTile> = (0..TARGET_COUNT)
            .map(|id| LetterTile {
                id,
                letter: target,
                is_target: true,
                found: false,
            })
            .collect();

        for i in 0..DISTRACTOR_COUNT {
            tiles.push(LetterTile {
                id: TARGET_COUNT + i,
                letter: distractors[rng.gen_range(0..distractors.len())],
                is_target: false,
                found: false,
            });
        }

        tiles.shuffle(rng);

        Self {
            target,
            tiles,
            score: 0,
            started_at,
            finished: false,
        }
    }

    pub fn found_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_target && t.found).count()
    }

    pub fn remaining(&self) -> usize {
        TARGET_COUNT - self.found_count()
    }

    pub fn pick(&mut self, tile_id: usize, now: DateTime<Utc>) -> PickOutcome {
        if self.finished {
            return PickOutcome::GameOver;
        }

        let Some(tile) = self.tiles.iter_mut().find(|t| t.id == tile_id) else {
            return PickOutcome::Miss;
        };

        if tile.found {
            return PickOutcome::AlreadyFound;
        }

        if !tile.is_target {
            self.score = self.score.saturating_sub(MISS_PENALTY);
            return PickOutcome::Miss;
        }

        tile.found = true;
        self.score += FOUND_POINTS;

        let remaining = self.remaining();
        if remaining > 0 {
            return PickOutcome::Found { remaining };
        }

        let elapsed = (now - self.started_at).num_seconds().max(0);
        let bonus = (MAX_TIME_BONUS - elapsed).max(0) as u32;
        self.score += bonus;
        self.finished = true;

        PickOutcome::Won {
            final_score: self.score,
        }
    }
}
