//! Puzzle selection without replacement.
//!
//! Every category keeps its own set of titles already served. A pick only
//! considers unused titles; once a category runs dry its set is cleared and
//! the whole list becomes available again.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::{debug, warn};

use crate::catalog::{Category, Puzzle};
use crate::error::GameError;

#[derive(Debug, Default)]
pub struct PuzzlePicker {
    used: HashMap<Category, HashSet<&'static str>>,
}

impl PuzzlePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<R: Rng>(
        &mut self,
        category: Category,
        rng: &mut R,
    ) -> Result<&'static Puzzle, GameError> {
        self.next_from(category, category.puzzles(), rng)
    }

    /// Same as [`next`](Self::next) but over an explicit puzzle list.
    pub(crate) fn next_from<R: Rng>(
        &mut self,
        category: Category,
        puzzles: &'static [Puzzle],
        rng: &mut R,
    ) -> Result<&'static Puzzle, GameError> {
        if puzzles.is_empty() {
            return Err(GameError::EmptyCategory(category.key()));
        }
        let used = self.used.entry(category).or_default();

        let mut available: Vec<&'static Puzzle> =
            puzzles.iter().filter(|p| !used.contains(p.title)).collect();
        if available.is_empty() {
            warn!(%category, "every puzzle has been used, resetting");
            used.clear();
            available = puzzles.iter().collect();
        }

        let picked = available[rng.gen_range(0..available.len())];
        used.insert(picked.title);
        debug!(%category, title = picked.title, emoji = picked.emoji, "picked puzzle");
        Ok(picked)
    }

    /// Number of distinct titles still unserved in this cycle.
    pub fn remaining(&self, category: Category) -> usize {
        let titles: HashSet<&str> = category.puzzles().iter().map(|p| p.title).collect();
        match self.used.get(&category) {
            Some(used) => titles.difference(used).count(),
            None => titles.len(),
        }
    }

    pub fn reset(&mut self, category: Category) {
        self.used.remove(&category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    static TINY: &[Puzzle] = &[
        Puzzle { emoji: "🅰️", title: "A", hints: &[] },
        Puzzle { emoji: "🅱️", title: "B", hints: &[] },
        Puzzle { emoji: "©️", title: "C", hints: &[] },
    ];

    #[test]
    fn no_repeats_within_a_cycle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picker = PuzzlePicker::new();
        let mut seen = HashSet::new();
        for _ in 0..TINY.len() {
            let p = picker.next_from(Category::Movies, TINY, &mut rng).unwrap();
            assert!(seen.insert(p.title), "{} served twice", p.title);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn exhaustion_resets_the_cycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picker = PuzzlePicker::new();
        for _ in 0..TINY.len() {
            picker.next_from(Category::Movies, TINY, &mut rng).unwrap();
        }
        // Fourth pick starts a new cycle and must record only itself.
        let p = picker.next_from(Category::Movies, TINY, &mut rng).unwrap();
        let used = &picker.used[&Category::Movies];
        assert_eq!(used.len(), 1);
        assert!(used.contains(p.title));
    }

    #[test]
    fn categories_track_separately() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut picker = PuzzlePicker::new();
        picker.next(Category::Songs, &mut rng).unwrap();
        assert_eq!(picker.remaining(Category::Songs), Category::Songs.puzzles().len() - 1);
        assert_eq!(picker.remaining(Category::Books), Category::Books.puzzles().len());
        picker.reset(Category::Songs);
        assert_eq!(picker.remaining(Category::Songs), Category::Songs.puzzles().len());
    }

    #[test]
    fn empty_list_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut picker = PuzzlePicker::new();
        let err = picker.next_from(Category::Tv, &[], &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EmptyCategory("tv")));
    }
}
