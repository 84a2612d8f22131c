#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub colors: [&'static str; 9],
}

impl PuzzleTheme {
    pub fn tile_color(&self, tile: usize) -> &'static str {
        self.colors[tile % self.colors.len()]
    }
}

pub static PUZZLE_THEMES: [PuzzleTheme; 6] = [
    PuzzleTheme {
        id: "princess",
        name: "Prinzessinnen",
        emoji: "👸",
        colors: [
            "#FFB6C1", "#FF69B4", "#DDA0DD", "#FFE4E1", "#FFC0CB", "#FF1493", "#C71585", "#DB7093",
            "#FFB3BA",
        ],
    },
    PuzzleTheme {
        id: "heroes",
        name: "Helden",
        emoji: "🦸",
        colors: [
            "#4169E1", "#1E90FF", "#00BFFF", "#87CEEB", "#4682B4", "#5F9EA0", "#6495ED", "#00CED1",
            "#48D1CC",
        ],
    },
    PuzzleTheme {
        id: "animals",
        name: "Tiere",
        emoji: "🦁",
        colors: [
            "#FFD700", "#FFA500", "#FF8C00", "#FF6347", "#FF4500", "#DC143C", "#B22222", "#8B4513",
            "#D2691E",
        ],
    },
    PuzzleTheme {
        id: "magic",
        name: "Magie",
        emoji: "✨",
        colors: [
            "#9370DB", "#8A2BE2", "#9400D3", "#9932CC", "#BA55D3", "#DA70D6", "#EE82EE", "#DDA0DD",
            "#D8BFD8",
        ],
    },
    PuzzleTheme {
        id: "ocean",
        name: "Ozean",
        emoji: "🧜‍♀️",
        colors: [
            "#00CED1", "#20B2AA", "#48D1CC", "#40E0D0", "#7FFFD4", "#00FFFF", "#5F9EA0", "#4682B4",
            "#87CEEB",
        ],
    },
    PuzzleTheme {
        id: "adventure",
        name: "Abenteuer",
        emoji: "🗺️",
        colors: [
            "#228B22", "#32CD32", "#00FA9A", "#98FB98", "#90EE90", "#3CB371", "#2E8B57", "#008000",
            "#006400",
        ],
    },
];
