//! Countries category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🍁🏒", title: "Canada", hints: &["Maple syrup", "The Great White North", "A friendly, bilingual country"] },
    Puzzle { emoji: "🗻🍣", title: "Japan", hints: &["Land of the rising sun", "Sushi and technology", "Tokyo and Mount Fuji"] },
    Puzzle { emoji: "🍕🍝", title: "Italy", hints: &["The Colosseum", "Pasta and pizza", "Rome and Venice"] },
    Puzzle { emoji: "🕌🐘", title: "India", hints: &["Bollywood", "Taj Mahal", "A diverse culture and cuisine"] },
    Puzzle { emoji: "🪆❄️", title: "Russia", hints: &["Cold winters", "Vodka and matryoshkas", "Moscow and Saint Petersburg"] },
    Puzzle { emoji: "🗽🍔", title: "United States", hints: &["Hollywood", "The land of opportunity", "The White House"] },
    Puzzle { emoji: "🐼🧱", title: "China", hints: &["The Great Wall", "Panda bears", "Ancient history and culture"] },
    Puzzle { emoji: "💃🥘", title: "Spain", hints: &["Flamenco dancing", "Sangria and paella", "Barcelona and Madrid"] },
    Puzzle { emoji: "💂🍵", title: "United Kingdom", hints: &["Big Ben", "Royalty and tea", "London and the Beatles"] },
    Puzzle { emoji: "🗼🥐", title: "France", hints: &["The Eiffel Tower", "Croissants and wine", "Paris and the Louvre"] },
    Puzzle { emoji: "🍺🥨", title: "Germany", hints: &["Beer and Oktoberfest", "Berlin's history", "Volkswagen and pretzels"] },
    Puzzle { emoji: "🦘🐨", title: "Australia", hints: &["The Great Barrier Reef", "Koalas and kangaroos", "Sydney Opera House"] },
    Puzzle { emoji: "⚽🌴🎉", title: "Brazil", hints: &["Samba and Carnival", "The Amazon rainforest", "Rio de Janeiro and football"] },
    Puzzle { emoji: "🌮🌵", title: "Mexico", hints: &["Tacos and tequila", "Mayan pyramids", "A rich cultural history"] },
    Puzzle { emoji: "🎤🥢🌶️", title: "South Korea", hints: &["K-Pop", "Kimchi and Seoul", "Technology and innovation"] },
    Puzzle { emoji: "🪑🌌", title: "Sweden", hints: &["Ikea", "Northern Lights", "ABBA and Swedish design"] },
    Puzzle { emoji: "🥝🐑", title: "New Zealand", hints: &["The land of the Hobbits", "Stunning landscapes", "A paradise for adventure lovers"] },
    Puzzle { emoji: "🕍🌊🧂", title: "Israel", hints: &["Jerusalem", "A place of religious significance", "Dead Sea and the Wailing Wall"] },
    Puzzle { emoji: "🐫🔺", title: "Egypt", hints: &["Pyramids and Pharaohs", "The Nile River", "Ancient civilization"] },
    Puzzle { emoji: "💃🥩", title: "Argentina", hints: &["Tango and steak", "Buenos Aires", "Patagonia and the Andes"] },
];
