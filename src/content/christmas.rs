#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub id: &'static str,
    pub emoji: &'static str,
    pub name: &'static str,
}

pub static TREE_DECORATIONS: [Decoration; 10] = [
    Decoration { id: "star", emoji: "⭐", name: "Stern" },
    Decoration { id: "ball-red", emoji: "🔴", name: "Rote Kugel" },
    Decoration { id: "ball-gold", emoji: "🟡", name: "Goldene Kugel" },
    Decoration { id: "ball-blue", emoji: "🔵", name: "Blaue Kugel" },
    Decoration { id: "candy", emoji: "🍬", name: "Zuckerstange" },
    Decoration { id: "bell", emoji: "🔔", name: "Glocke" },
    Decoration { id: "gift", emoji: "🎁", name: "Geschenk" },
    Decoration { id: "snowflake", emoji: "❄️", name: "Schneeflocke" },
    Decoration { id: "angel", emoji: "👼", name: "Engel" },
    Decoration { id: "light", emoji: "💡", name: "Licht" },
];

pub static ROOM_DECORATIONS: [Decoration; 8] = [
    Decoration { id: "santa", emoji: "🎅", name: "Weihnachtsmann" },
    Decoration { id: "snowman", emoji: "⛄", name: "Schneemann" },
    Decoration { id: "wreath", emoji: "🎄", name: "Kranz" },
    Decoration { id: "candle", emoji: "🕯️", name: "Kerze" },
    Decoration { id: "sock", emoji: "🧦", name: "Socke" },
    Decoration { id: "cookie", emoji: "🍪", name: "Plätzchen" },
    Decoration { id: "present", emoji: "🎁", name: "Geschenk" },
    Decoration { id: "reindeer", emoji: "🦌", name: "Rentier" },
];
