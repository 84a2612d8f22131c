#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPad {
    pub name: &'static str,
    pub color: &'static str,
    pub tone_hz: f32,
}

pub static COLOR_PADS: [ColorPad; 4] = [
    ColorPad { name: "Blau", color: "#2196F3", tone_hz: 261.63 },
    ColorPad { name: "Rot", color: "#FF5252", tone_hz: 329.63 },
    ColorPad { name: "Grün", color: "#4CAF50", tone_hz: 392.00 },
    ColorPad { name: "Gelb", color: "#FFEB3B", tone_hz: 523.25 },
];

pub static HOW_TO_PLAY: [&str; 4] = [
    "1️⃣ Beobachte die Farben die aufleuchten",
    "2️⃣ Merke dir die Reihenfolge",
    "3️⃣ Wiederhole die Sequenz",
    "4️⃣ Jedes Level wird länger! 🎯",
];
