//! Books category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🕷️🕸️🐷", title: "Charlotte's Web", hints: &["A pig and a spider", "A tale of friendship", "Wilbur the pig"] },
    Puzzle { emoji: "🧙‍♂️💍🌋", title: "The Lord of the Rings", hints: &["A magical journey", "One ring to rule them all", "Frodo and Gandalf"] },
    Puzzle { emoji: "🦁🧙‍♀️🚪", title: "The Lion, the Witch and the Wardrobe", hints: &["A magical land", "The wardrobe leads to Narnia", "Aslan the lion"] },
    Puzzle { emoji: "🐷🏡", title: "Animal Farm", hints: &["A farm with talking animals", "All animals are equal", "Rebellion against oppression"] },
    Puzzle { emoji: "👦🔮🏫", title: "Harry Potter", hints: &["A magical school", "The boy who lived", "Wand waving and spells"] },
    Puzzle { emoji: "🐳🚢", title: "Moby Dick", hints: &["A huge white whale", "Call me Ishmael", "A sea captain's obsession"] },
    Puzzle { emoji: "🕵️‍♂️🔍🎻", title: "Sherlock Holmes", hints: &["A brilliant detective", "Elementary, my dear Watson", "Solving mysteries"] },
    Puzzle { emoji: "👧📚🔮", title: "Matilda", hints: &["A gifted young girl", "Telekinetic powers", "A story by Roald Dahl"] },
    Puzzle { emoji: "🏝️👨", title: "Robinson Crusoe", hints: &["Stranded on an island", "A solitary man", "Survival and solitude"] },
    Puzzle { emoji: "👑🗡️🐉", title: "Game of Thrones", hints: &["Warring kingdoms", "Winter is coming", "Dragons and intrigue"] },
    Puzzle { emoji: "🤫🌷🔑", title: "The Secret Garden", hints: &["A hidden garden", "A healing place", "A story of growth and friendship"] },
    Puzzle { emoji: "⚡🌊🔱", title: "Percy Jackson", hints: &["The son of a Greek god", "Mythology in the modern world", "Camp Half-Blood"] },
    Puzzle { emoji: "🏹🐦", title: "The Hunger Games", hints: &["A dystopian world", "A rebellion against the Capitol", "Katniss Everdeen"] },
    Puzzle { emoji: "📖💀", title: "The Book Thief", hints: &["A story of books in Nazi Germany", "Liesel Meminger", "A tale of love and loss"] },
    Puzzle { emoji: "🦸‍♀️💪", title: "Wonder Woman", hints: &["A strong warrior", "A superhero origin story", "Diana Prince"] },
    Puzzle { emoji: "🐉⚔️", title: "Eragon", hints: &["A young dragon rider", "The Inheritance Cycle", "A mythical world"] },
    Puzzle { emoji: "🖼️🕵️‍♂️🔐", title: "The Da Vinci Code", hints: &["A religious mystery", "Ancient secrets", "Robert Langdon's quest"] },
    Puzzle { emoji: "🏞️🦒", title: "Out of Africa", hints: &["A love story in Africa", "Karen Blixen's memoir", "Life in Kenya"] },
    Puzzle { emoji: "🎩🐇", title: "Alice in Wonderland", hints: &["A girl in a strange world", "The White Rabbit", "Through the looking glass"] },
];
