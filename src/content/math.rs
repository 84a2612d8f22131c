/// Fruit and vegetables used to draw countable groups beside small sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualItem {
    pub emoji: &'static str,
    pub name: &'static str,
}

pub static VISUAL_ITEMS: [VisualItem; 15] = [
    VisualItem { emoji: "🍎", name: "Apfel" },
    VisualItem { emoji: "🍊", name: "Orange" },
    VisualItem { emoji: "🍌", name: "Banane" },
    VisualItem { emoji: "🍇", name: "Traube" },
    VisualItem { emoji: "🍓", name: "Erdbeere" },
    VisualItem { emoji: "🍉", name: "Wassermelone" },
    VisualItem { emoji: "🥕", name: "Karotte" },
    VisualItem { emoji: "🥒", name: "Gurke" },
    VisualItem { emoji: "🍅", name: "Tomate" },
    VisualItem { emoji: "🥦", name: "Brokkoli" },
    VisualItem { emoji: "🌽", name: "Mais" },
    VisualItem { emoji: "🍑", name: "Pfirsich" },
    VisualItem { emoji: "🍐", name: "Birne" },
    VisualItem { emoji: "🥔", name: "Kartoffel" },
    VisualItem { emoji: "🍆", name: "Aubergine" },
];
