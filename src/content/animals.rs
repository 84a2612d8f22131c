#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    pub emoji: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
    pub habitat: &'static str,
    pub fact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continent {
    pub name: &'static str,
    pub emoji: &'static str,
}

pub static CONTINENTS: [Continent; 7] = [
    Continent { name: "Afrika", emoji: "🌍" },
    Continent { name: "Asien", emoji: "🌏" },
    Continent { name: "Europa", emoji: "🌍" },
    Continent { name: "Nordamerika", emoji: "🌎" },
    Continent { name: "Südamerika", emoji: "🌎" },
    Continent { name: "Australien", emoji: "🦘" },
    Continent { name: "Antarktis", emoji: "🧊" },
];

pub static ANIMALS: [Animal; 16] = [
    Animal {
        emoji: "🦁",
        name: "Löwe",
        continent: "Afrika",
        habitat: "Savanne",
        fact: "Der König der Tiere lebt in Rudeln!",
    },
    Animal {
        emoji: "🐘",
        name: "Elefant",
        continent: "Afrika",
        habitat: "Savanne & Wald",
        fact: "Das größte Landtier der Welt!",
    },
    Animal {
        emoji: "🐼",
        name: "Panda",
        continent: "Asien",
        habitat: "Bergwälder",
        fact: "Isst nur Bambus - bis zu 40kg am Tag!",
    },
    Animal {
        emoji: "🦘",
        name: "Känguru",
        continent: "Australien",
        habitat: "Grasland",
        fact: "Kann bis zu 3 Meter hoch springen!",
    },
    Animal {
        emoji: "🐧",
        name: "Pinguin",
        continent: "Antarktis",
        habitat: "Eis & Ozean",
        fact: "Kann nicht fliegen, aber super schwimmen!",
    },
    Animal {
        emoji: "🦎",
        name: "Leguan",
        continent: "Südamerika",
        habitat: "Regenwald",
        fact: "Kann seinen Schwanz abwerfen!",
    },
    Animal {
        emoji: "🦒",
        name: "Giraffe",
        continent: "Afrika",
        habitat: "Savanne",
        fact: "Das höchste Tier der Welt - bis 6 Meter!",
    },
    Animal {
        emoji: "🐻",
        name: "Braunbär",
        continent: "Europa",
        habitat: "Wälder",
        fact: "Hält Winterschlaf und isst sehr gerne Honig!",
    },
    Animal {
        emoji: "🐅",
        name: "Tiger",
        continent: "Asien",
        habitat: "Dschungel",
        fact: "Die größte Raubkatze der Welt!",
    },
    Animal {
        emoji: "🦫",
        name: "Biber",
        continent: "Nordamerika",
        habitat: "Flüsse",
        fact: "Baut Dämme aus Holz und Schlamm!",
    },
    Animal {
        emoji: "🦙",
        name: "Lama",
        continent: "Südamerika",
        habitat: "Anden-Gebirge",
        fact: "Kann Menschen anspucken wenn es sauer ist!",
    },
    Animal {
        emoji: "🦓",
        name: "Zebra",
        continent: "Afrika",
        habitat: "Savanne",
        fact: "Jedes Zebra hat ein einzigartiges Streifenmuster!",
    },
    Animal {
        emoji: "🦉",
        name: "Eule",
        continent: "Europa",
        habitat: "Wälder",
        fact: "Kann den Kopf um 270 Grad drehen!",
    },
    Animal {
        emoji: "🦭",
        name: "Robbe",
        continent: "Antarktis",
        habitat: "Eis & Ozean",
        fact: "Kann bis zu 30 Minuten unter Wasser bleiben!",
    },
    Animal {
        emoji: "🐨",
        name: "Koala",
        continent: "Australien",
        habitat: "Eukalyptuswälder",
        fact: "Schläft bis zu 20 Stunden am Tag!",
    },
    Animal {
        emoji: "🦍",
        name: "Gorilla",
        continent: "Afrika",
        habitat: "Regenwald",
        fact: "Sehr stark aber auch sehr friedlich!",
    },
];

pub fn animals_of(continent: &str) -> impl Iterator<Item = &'static Animal> + '_ {
    ANIMALS.iter().filter(move |animal| animal.continent == continent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_animal_lives_on_a_listed_continent() {
        for animal in ANIMALS.iter() {
            assert!(
                CONTINENTS.iter().any(|c| c.name == animal.continent),
                "{} has unknown continent {}",
                animal.name,
                animal.continent
            );
        }
    }

    #[test]
    fn test_every_continent_has_animals() {
        for continent in CONTINENTS.iter() {
            assert!(animals_of(continent.name).count() > 0, "{}", continent.name);
        }
    }
}
