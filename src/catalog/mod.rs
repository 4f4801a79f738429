//! Puzzle catalog: the bundled emoji puzzles grouped by category.
//!
//! Each category lives in its own file under `src/catalog/` and exposes a
//! `PUZZLES` table. Titles are unique within a category; the picker keys its
//! used-set on the title.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

mod books;
mod brands;
mod countries;
mod movies;
mod songs;
mod tv;

/// One emoji-to-title mapping with its hints, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub emoji: &'static str,
    pub title: &'static str,
    pub hints: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Movies,
    Songs,
    Books,
    Tv,
    Countries,
    Brands,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Movies,
        Category::Songs,
        Category::Books,
        Category::Tv,
        Category::Countries,
        Category::Brands,
    ];

    /// Key used in `data-category` attributes and stored feedback.
    pub fn key(self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Songs => "songs",
            Category::Books => "books",
            Category::Tv => "tv",
            Category::Countries => "countries",
            Category::Brands => "brands",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Movies => "Movies",
            Category::Songs => "Songs",
            Category::Books => "Books",
            Category::Tv => "TV Shows",
            Category::Countries => "Countries",
            Category::Brands => "Brands",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, GameError> {
        let key = key.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| GameError::UnknownCategory(key.to_string()))
    }

    pub fn puzzles(self) -> &'static [Puzzle] {
        match self {
            Category::Movies => movies::PUZZLES,
            Category::Songs => songs::PUZZLES,
            Category::Books => books::PUZZLES,
            Category::Tv => tv::PUZZLES,
            Category::Countries => countries::PUZZLES,
            Category::Brands => brands::PUZZLES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s)
    }
}
