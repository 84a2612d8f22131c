#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushingStep {
    pub title: &'static str,
    pub instruction: &'static str,
    pub emoji: &'static str,
    pub duration_secs: u32,
}

pub static BRUSHING_STEPS: [BrushingStep; 6] = [
    BrushingStep {
        title: "Zahnbürste vorbereiten",
        instruction: "Gib eine erbsengroße Menge Zahnpasta auf die Bürste",
        emoji: "🦷",
        duration_secs: 5,
    },
    BrushingStep {
        title: "Außenseiten putzen",
        instruction: "Putze die Außenseiten der Zähne in kreisenden Bewegungen",
        emoji: "😁",
        duration_secs: 30,
    },
    BrushingStep {
        title: "Innenseiten putzen",
        instruction: "Jetzt die Innenseiten der Zähne putzen",
        emoji: "🦷",
        duration_secs: 30,
    },
    BrushingStep {
        title: "Kauflächen putzen",
        instruction: "Putze die Kauflächen mit Hin- und Her-Bewegungen",
        emoji: "😬",
        duration_secs: 20,
    },
    BrushingStep {
        title: "Zunge reinigen",
        instruction: "Vergiss nicht, auch deine Zunge zu putzen!",
        emoji: "👅",
        duration_secs: 10,
    },
    BrushingStep {
        title: "Ausspülen",
        instruction: "Spüle deinen Mund gründlich mit Wasser aus",
        emoji: "💧",
        duration_secs: 10,
    },
];

/// Clickable mouth regions, positioned in percent of the mouth picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeethArea {
    pub id: &'static str,
    pub name: &'static str,
    pub x: u8,
    pub y: u8,
}

pub static TEETH_AREAS: [TeethArea; 6] = [
    TeethArea { id: "top-left", name: "Oben Links", x: 20, y: 30 },
    TeethArea { id: "top-center", name: "Oben Mitte", x: 50, y: 25 },
    TeethArea { id: "top-right", name: "Oben Rechts", x: 80, y: 30 },
    TeethArea { id: "bottom-left", name: "Unten Links", x: 20, y: 70 },
    TeethArea { id: "bottom-center", name: "Unten Mitte", x: 50, y: 75 },
    TeethArea { id: "bottom-right", name: "Unten Rechts", x: 80, y: 70 },
];
