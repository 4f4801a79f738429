//! Guess normalization and the fixed scoring deltas.

pub const CORRECT_POINTS: u32 = 10;
pub const WRONG_PENALTY: u32 = 2;
/// Cost of the first, second and third hint. Later hints cost the last entry.
pub const HINT_COSTS: [u32; 3] = [1, 3, 5];
/// Incorrect guesses in one round that end the game.
pub const MAX_INCORRECT_GUESSES: u32 = 3;

/// Lowercases and drops whitespace and hyphens so "spider man", "Spider-Man"
/// and "SPIDERMAN" all compare equal.
pub fn normalize_guess(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_correct(guess: &str, title: &str) -> bool {
    let guess = normalize_guess(guess);
    !guess.is_empty() && guess == normalize_guess(title)
}

/// Cost of the hint at zero-based position `index`.
pub fn hint_cost(index: usize) -> u32 {
    HINT_COSTS
        .get(index)
        .or_else(|| HINT_COSTS.last())
        .copied()
        .unwrap_or(0)
}

/// Player score. Never negative: every deduction saturates at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub fn new(points: u32) -> Self {
        Self(points)
    }

    pub fn points(self) -> u32 {
        self.0
    }

    pub fn award_correct(&mut self) -> u32 {
        self.0 = self.0.saturating_add(CORRECT_POINTS);
        CORRECT_POINTS
    }

    /// Returns the points actually deducted (may be less than the penalty near zero).
    pub fn penalize_wrong(&mut self) -> u32 {
        self.deduct(WRONG_PENALTY)
    }

    pub fn penalize_hint(&mut self, index: usize) -> u32 {
        self.deduct(hint_cost(index))
    }

    fn deduct(&mut self, amount: u32) -> u32 {
        let before = self.0;
        self.0 = self.0.saturating_sub(amount);
        before - self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
