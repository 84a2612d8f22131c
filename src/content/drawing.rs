#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub static PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "Blau", hex: "#2196F3" },
    PaletteColor { name: "Rot", hex: "#FF5252" },
    PaletteColor { name: "Grün", hex: "#4CAF50" },
    PaletteColor { name: "Gelb", hex: "#FFEB3B" },
    PaletteColor { name: "Lila", hex: "#9C27B0" },
    PaletteColor { name: "Orange", hex: "#FF9800" },
    PaletteColor { name: "Rosa", hex: "#E91E63" },
    PaletteColor { name: "Schwarz", hex: "#000000" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSize {
    pub name: &'static str,
    pub radius: u32,
    pub emoji: &'static str,
}

pub static BRUSH_SIZES: [BrushSize; 4] = [
    BrushSize { name: "Klein", radius: 2, emoji: "✏️" },
    BrushSize { name: "Mittel", radius: 4, emoji: "🖊️" },
    BrushSize { name: "Groß", radius: 8, emoji: "🖌️" },
    BrushSize { name: "Sehr groß", radius: 16, emoji: "🎨" },
];
