//! Movies category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🧙‍♂️👓⚡", title: "Harry Potter", hints: &["A wizarding world", "Diagon Alley", "Harry's lightning bolt scar"] },
    Puzzle { emoji: "🦁👑🌍", title: "The Lion King", hints: &["The circle of life", "Hakuna Matata", "Simba and Mufasa"] },
    Puzzle { emoji: "🚢❄️💔", title: "Titanic", hints: &["A doomed voyage", "The iceberg disaster", "Jack and Rose's love story"] },
    Puzzle { emoji: "👸❄️☃️", title: "Frozen", hints: &["An ice queen", "Let it go", "Elsa and Anna's bond"] },
    Puzzle { emoji: "🔍🐠", title: "Finding Nemo", hints: &["A lost fish", "Just keep swimming", "Marlin and Dory's ocean adventure"] },
    Puzzle { emoji: "🕷️🧔", title: "Spider-Man", hints: &["A web-slinging superhero", "With great power...", "Peter Parker"] },
    Puzzle { emoji: "🤖❤️🌱", title: "WALL-E", hints: &["Post-apocalyptic Earth", "A robot cleaning the planet", "Love in the form of a plant"] },
    Puzzle { emoji: "👻👻👻👨", title: "Ghostbusters", hints: &["Ghost hunting team", "Who you gonna call?", "The Stay Puft Marshmallow Man"] },
    Puzzle { emoji: "🦖🏝️", title: "Jurassic Park", hints: &["Dinosaurs on the loose", "Life finds a way", "A theme park gone wrong"] },
    Puzzle { emoji: "🦇👨🃏", title: "The Dark Knight", hints: &["The Joker's reign of terror", "Why so serious?", "Batman vs The Joker"] },
    Puzzle { emoji: "👽🌌🚲", title: "E.T.", hints: &["An alien from another world", "Phone home", "A boy befriends a stranded alien"] },
    Puzzle { emoji: "🦸‍♂️🛸", title: "Superman", hints: &["Kryptonian hero", "Faster than a speeding bullet", "Clark Kent and Lois Lane"] },
    Puzzle { emoji: "🕷️🖤", title: "Venom", hints: &["Alien symbiote", "Anti-hero", "Eddie Brock's transformation"] },
    Puzzle { emoji: "⚔️🏛️", title: "Gladiator", hints: &["Fighting in the arena", "Revenge and honor", "Maximus Decimus Meridius"] },
    Puzzle { emoji: "🔫💥🎄", title: "Die Hard", hints: &["Christmas action movie", "Yippee-ki-yay", "Bruce Willis as John McClane"] },
    Puzzle { emoji: "💊🕶️💻", title: "The Matrix", hints: &["A simulated reality", "Red pill or blue pill?", "Neo's journey to freedom"] },
    Puzzle { emoji: "🦸‍♀️💥", title: "Wonder Woman", hints: &["Amazonian warrior", "God killer", "Diana Prince"] },
    Puzzle { emoji: "🕴️🕶️👽", title: "Men in Black", hints: &["Alien secret agents", "The neuralyzer", "Will Smith and Tommy Lee Jones"] },
    Puzzle { emoji: "🚕🚨", title: "Taxi Driver", hints: &["A New York vigilante", "Mental instability", "Robert De Niro as Travis Bickle"] },
    Puzzle { emoji: "🏹🎯🔥", title: "The Hunger Games", hints: &["Dystopian society", "The Mockingjay", "Katniss Everdeen's rebellion"] },
];
