pub static CARD_EMOJIS: [&str; 16] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔",
];

pub const CARD_BACK: &str = "❓";
