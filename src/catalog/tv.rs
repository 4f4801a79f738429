//! TV shows category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🧪👨‍🏫💎", title: "Breaking Bad", hints: &["A chemistry teacher turned criminal", "Blue crystals", "Walter White's transformation"] },
    Puzzle { emoji: "👑⚔️❄️", title: "Game of Thrones", hints: &["Warring kingdoms", "Dragons and intrigue", "Winter is coming"] },
    Puzzle { emoji: "🕵️‍♂️🧩", title: "Sherlock", hints: &["A brilliant detective", "The game is afoot", "Sherlock Holmes and Watson"] },
    Puzzle { emoji: "🍩🍺🟡", title: "The Simpsons", hints: &["A family in Springfield", "Homer's favorite food", "D'oh!"] },
    Puzzle { emoji: "💥🔬🤓", title: "The Big Bang Theory", hints: &["A genius physicist and his friends", "Socially awkward scientists", "Sheldon Cooper"] },
    Puzzle { emoji: "🐺⚔️🧙", title: "The Witcher", hints: &["A monster hunter", "Geralt of Rivia", "Based on a book series"] },
    Puzzle { emoji: "✅🕵️‍♂️", title: "True Detective", hints: &["Crime and mystery", "A dark investigation", "A haunting journey"] },
    Puzzle { emoji: "🦸‍♂️⚡", title: "The Flash", hints: &["A super-fast hero", "Central City", "Barry Allen's powers"] },
    Puzzle { emoji: "👑🇬🇧", title: "The Crown", hints: &["Royal family drama", "The British monarchy", "A historical TV show"] },
    Puzzle { emoji: "🐒🌴📖", title: "The Jungle Book", hints: &["A boy raised by animals", "Jungle animals", "Mowgli's adventure"] },
    Puzzle { emoji: "👩‍⚕️🏥", title: "Grey's Anatomy", hints: &["Doctors in Seattle", "Romance and surgeries", "Meredith Grey's journey"] },
    Puzzle { emoji: "🏠🐉", title: "House of the Dragon", hints: &["Targaryens", "Dragons in Westeros", "Prequel to Game of Thrones"] },
    Puzzle { emoji: "☕🛋️👫", title: "Friends", hints: &["Six friends in New York", "The one with the coffee shop", "Ross, Rachel, Monica, Chandler, Phoebe, and Joey"] },
    Puzzle { emoji: "🧟‍♂️🚶", title: "The Walking Dead", hints: &["Zombies take over the world", "Survival and human drama", "Rick Grimes and his group"] },
    Puzzle { emoji: "🚲🔦🙃", title: "Stranger Things", hints: &["Supernatural events", "A small town mystery", "The Upside Down"] },
    Puzzle { emoji: "🔪🩸🔬", title: "Dexter", hints: &["A forensic expert and a serial killer", "The blood spatter analyst", "Dexter's dark secret"] },
    Puzzle { emoji: "❌📁👽", title: "The X-Files", hints: &["Aliens and mysteries", "FBI agents", "Trust no one"] },
    Puzzle { emoji: "🤵🌹💍", title: "The Bachelor", hints: &["A dating reality show", "The rose ceremony", "A reality show with love"] },
    Puzzle { emoji: "💯👦👧🌍", title: "The 100", hints: &["Post-apocalyptic world", "Teenagers sent to Earth", "Survival against all odds"] },
];
