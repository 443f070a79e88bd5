use std::collections::VecDeque;

use lazy_static::lazy_static;

lazy_static! {
    /// The fixed catalog every session draws its queue from.
    static ref CATALOG: Vec<&'static str> = vec![
        "queen", "hospital", "basketball", "cat", "change", "snail", "soup",
        "calendar", "sad", "desk", "guitar", "home", "railway", "zebra",
        "jelly", "car", "crow", "trade", "bag", "roll", "bubble",
    ];
}

/// One playthrough: a shuffled word queue, the word currently on screen
/// and the running score.
///
/// The session starts in play and finishes exactly once, either when the
/// queue runs out on an advance or when the player ends the game early.
/// After that every mutating call is a no-op; the last drawn word stays
/// visible and the score is frozen.
pub struct GameSession {
    word: String,
    score: i32,
    remaining: VecDeque<String>,
    finished: bool,
    finish_event: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rng(&fastrand::Rng::new())
    }

    /// Reproducible playthrough: the same seed yields the same word order.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(&fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: &fastrand::Rng) -> Self {
        let mut words: Vec<String> = CATALOG.iter().map(|w| w.to_string()).collect();
        rng.shuffle(&mut words);
        Self::from_words(words)
    }

    /// Builds a session over an already ordered queue, skipping the
    /// catalog and the shuffle. The first word is drawn immediately.
    pub fn from_words(words: Vec<String>) -> Self {
        let mut session = Self {
            word: String::new(),
            score: 0,
            remaining: words.into(),
            finished: false,
            finish_event: false,
        };
        session.advance();
        log::info!("session created, {} words queued", session.remaining.len());
        session
    }

    /// Draws the next word, or finishes the session if none remain. On
    /// exhaustion the previous word stays as the current one.
    fn advance(&mut self) {
        match self.remaining.pop_front() {
            Some(next) => {
                self.word = next;
                log::info!("next word: {}", self.word);
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.finish_event = true;
        log::info!("game finished with score {}", self.score);
    }

    pub fn on_correct(&mut self) {
        if self.finished {
            return;
        }
        self.score += 1;
        log::info!("correct, score is now {}", self.score);
        self.advance();
    }

    pub fn on_skip(&mut self) {
        if self.finished {
            return;
        }
        self.score -= 1;
        log::info!("skipped, score is now {}", self.score);
        self.advance();
    }

    /// Early termination by the player. Score is left as it stands.
    pub fn end_game(&mut self) {
        if self.finished {
            return;
        }
        self.finish();
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// One-shot finish notification: true exactly once per session, at
    /// the transition into the finished state.
    pub fn take_finish_event(&mut self) -> bool {
        std::mem::take(&mut self.finish_event)
    }
}
