//! Songs category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🚀👨", title: "Rocket Man", hints: &["An astronaut's tale", "Elton John classic", "Flying solo in space"] },
    Puzzle { emoji: "🌧️💜", title: "Purple Rain", hints: &["A stormy love song", "Prince's signature track", "I never meant to cause you any sorrow"] },
    Puzzle { emoji: "👑", title: "King", hints: &["A battle for royalty", "Years & Years hit", "Who's the king now?"] },
    Puzzle { emoji: "🎂🎵", title: "Birthday", hints: &["A celebratory song", "Katy Perry's hit", "Happy birthday to you"] },
    Puzzle { emoji: "🙋‍♀️👋👋👋", title: "Hello", hints: &["A heartfelt Adele ballad", "Longing and loneliness", "Hello from the other side"] },
    Puzzle { emoji: "🍉🍬", title: "Watermelon Sugar", hints: &["A fruity tune", "Harry Styles' catchy hit", "Good vibes and summer memories"] },
    Puzzle { emoji: "💎💎", title: "Diamonds", hints: &["Shine bright", "Rihanna's anthem", "Sparkling and beautiful"] },
    Puzzle { emoji: "🚶‍♂️🌙", title: "Walking on the Moon", hints: &["A dreamy track", "The Police's 80s hit", "Strange but familiar"] },
    Puzzle { emoji: "🎆🎇", title: "Firework", hints: &["Katy Perry's explosive anthem", "A symbol of self-expression", "Show them what you're worth"] },
    Puzzle { emoji: "❤️🪞", title: "Love Yourself", hints: &["Justin Bieber's breakup song", "Self-love anthem", "You should go and love yourself"] },
    Puzzle { emoji: "⏳🔁⏳", title: "Time After Time", hints: &["Cyndi Lauper classic", "Time and love", "I will be waiting for you"] },
    Puzzle { emoji: "🔒🚪☁️", title: "Locked Out of Heaven", hints: &["Bruno Mars hit", "A relationship that feels heavenly", "I'm locked out of heaven"] },
    Puzzle { emoji: "😢💨", title: "Tears Dry on Their Own", hints: &["Amy Winehouse track", "Dealing with heartbreak", "I'm stronger without you"] },
    Puzzle { emoji: "🙏⛪", title: "Take Me to Church", hints: &["Hozier's anthem", "A powerful voice", "Love and religion collide"] },
    Puzzle { emoji: "🔥📞", title: "Hotline Bling", hints: &["Drake's catchy tune", "Stuck on someone", "You used to call me on my cell phone"] },
    Puzzle { emoji: "🎤👑🎸", title: "Bohemian Rhapsody", hints: &["A legendary rock opera", "Queen's masterpiece", "Is this the real life?"] },
    Puzzle { emoji: "⏱️⏳", title: "Time", hints: &["Pink Floyd track", "Life's fleeting nature", "Ticking clock in the background"] },
    Puzzle { emoji: "💭💔", title: "Someone Like You", hints: &["Adele's heartfelt ballad", "A lost love", "I heard that you're settled down"] },
    Puzzle { emoji: "⭐👦", title: "Starboy", hints: &["The Weeknd's modern classic", "Shining bright", "I'm a starboy"] },
];
