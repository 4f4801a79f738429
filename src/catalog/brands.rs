//! Brands category.

use super::Puzzle;

pub static PUZZLES: &[Puzzle] = &[
    Puzzle { emoji: "🍏📱", title: "Apple", hints: &["Innovative tech company", "MacBook and iPhone", "A bite out of the apple logo"] },
    Puzzle { emoji: "👟✔️", title: "Nike", hints: &["Just do it", "Athletic wear", "Swoosh logo"] },
    Puzzle { emoji: "🛋️🔧🇸🇪", title: "IKEA", hints: &["Furniture and home goods", "Swedish design", "Flat-packed assembly"] },
    Puzzle { emoji: "🐱🍫", title: "KitKat", hints: &["Chocolate bar", "Break time", "Nestlé product"] },
    Puzzle { emoji: "🍔🍟🤡", title: "McDonald's", hints: &["Golden arches", "Fast food chain", "Happy Meal and Big Mac"] },
    Puzzle { emoji: "☕🍩", title: "Dunkin' Donuts", hints: &["Coffee and donuts", "America's favorite", "A pink box full of donuts"] },
    Puzzle { emoji: "🍫🍪🥛", title: "Oreo", hints: &["A cookie with a twist", "Twist, lick, dunk", "Chocolate sandwich cookie"] },
    Puzzle { emoji: "🏎️🐎", title: "Ferrari", hints: &["Luxury sports car", "Italian engineering", "Prancing horse logo"] },
    Puzzle { emoji: "🍩✨🔥", title: "Krispy Kreme", hints: &["Doughnuts hot and fresh", "The original glazed", "Sweet treats"] },
    Puzzle { emoji: "📱💬", title: "WhatsApp", hints: &["Messaging app", "Owned by Facebook", "Green speech bubble logo"] },
    Puzzle { emoji: "🔋🚗⚡", title: "Tesla", hints: &["Electric cars", "Innovative technology", "Elon Musk's company"] },
    Puzzle { emoji: "🎮🍄", title: "Nintendo", hints: &["Mario and Zelda", "Video game company", "The Switch console"] },
    Puzzle { emoji: "🍺👑", title: "Budweiser", hints: &["American beer", "King of beers", "Red label and iconic logo"] },
    Puzzle { emoji: "🍷🐓", title: "Gallo", hints: &["Wine brand", "Rich heritage", "A rooster as the logo"] },
    Puzzle { emoji: "👵🍏", title: "Granny Smith", hints: &["Famous green apple variety", "Sour and crisp", "Australian origin"] },
    Puzzle { emoji: "🎬📺🍿", title: "Netflix", hints: &["Streaming platform", "Original series", "Binge-watching favorite"] },
    Puzzle { emoji: "🍔👑", title: "Burger King", hints: &["Fast food giant", "Have it your way", "Flame-grilled burgers"] },
    Puzzle { emoji: "💄💋", title: "MAC Cosmetics", hints: &["Beauty and makeup", "A popular cosmetics brand", "Bold and trendy"] },
    Puzzle { emoji: "🎧🥁", title: "Beats by Dre", hints: &["High-quality headphones", "Audio tech brand", "Owned by Apple"] },
    Puzzle { emoji: "📦😊", title: "Amazon", hints: &["E-commerce giant", "The Everything Store", "Prime delivery service"] },
];
