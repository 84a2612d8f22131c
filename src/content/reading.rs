#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingQuestion {
    pub question: &'static str,
    pub answers: [&'static str; 4],
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub grade: u8,
    pub title: &'static str,
    pub text: &'static str,
    pub questions: &'static [ReadingQuestion],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub id: u8,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub static GRADES: [Grade; 5] = [
    Grade { id: 1, name: "1. Klasse", emoji: "📖", description: "Erste Wörter" },
    Grade { id: 2, name: "2. Klasse", emoji: "📚", description: "Kurze Texte" },
    Grade { id: 3, name: "3. Klasse", emoji: "📝", description: "Geschichten" },
    Grade { id: 4, name: "4. Klasse", emoji: "📔", description: "Längere Texte" },
    Grade { id: 5, name: "5. Klasse", emoji: "📕", description: "Fortgeschritten" },
];

pub static STORIES: [Story; 6] = [
    Story {
        grade: 1,
        title: "Der kleine Hund",
        text: "Max ist ein kleiner Hund. Er ist braun. Max mag Bälle. Er spielt gern im Park. Max hat viele Freunde.",
        questions: &[
            ReadingQuestion {
                question: "Welche Farbe hat Max?",
                answers: ["braun", "schwarz", "weiß", "gelb"],
                correct: 0,
            },
            ReadingQuestion {
                question: "Was mag Max?",
                answers: ["Katzen", "Bälle", "Autos", "Bücher"],
                correct: 1,
            },
        ],
    },
    Story {
        grade: 1,
        title: "Die Katze Luna",
        text: "Luna ist eine Katze. Sie ist grau und weiß. Luna schläft gern auf dem Sofa. Sie trinkt Milch. Luna ist sehr lieb.",
        questions: &[
            ReadingQuestion {
                question: "Wo schläft Luna gern?",
                answers: ["auf dem Sofa", "im Garten", "auf dem Baum", "im Auto"],
                correct: 0,
            },
            ReadingQuestion {
                question: "Was trinkt Luna?",
                answers: ["Wasser", "Saft", "Milch", "Tee"],
                correct: 2,
            },
        ],
    },
    Story {
        grade: 2,
        title: "Der Schulausflug",
        text: "Heute macht die Klasse 2b einen Ausflug in den Zoo. Emma freut sich sehr. Sie möchte die Affen sehen. Ihr Freund Tim mag Löwen am liebsten. Die Lehrerin Frau Müller hat Äpfel und Brote dabei.",
        questions: &[
            ReadingQuestion {
                question: "Wohin geht die Klasse?",
                answers: ["in den Park", "in den Zoo", "ins Museum", "ins Kino"],
                correct: 1,
            },
            ReadingQuestion {
                question: "Welche Tiere möchte Emma sehen?",
                answers: ["Löwen", "Elefanten", "Affen", "Zebras"],
                correct: 2,
            },
        ],
    },
    Story {
        grade: 3,
        title: "Das Geburtstagsfest",
        text: "Sarah wird heute neun Jahre alt. Sie hat viele Freunde zu ihrer Geburtstagsfeier eingeladen. Ihre Mutter hat einen großen Schokoladenkuchen gebacken. Im Garten spielen die Kinder Verstecken und Fangen. Als Geschenk wünscht sich Sarah ein neues Fahrrad.",
        questions: &[
            ReadingQuestion {
                question: "Wie alt wird Sarah?",
                answers: ["acht", "neun", "zehn", "elf"],
                correct: 1,
            },
            ReadingQuestion {
                question: "Was für einen Kuchen gibt es?",
                answers: ["Erdbeerkuchen", "Apfelkuchen", "Schokoladenkuchen", "Zitronenkuchen"],
                correct: 2,
            },
            ReadingQuestion {
                question: "Was wünscht sich Sarah als Geschenk?",
                answers: ["ein Buch", "ein Fahrrad", "eine Puppe", "einen Ball"],
                correct: 1,
            },
        ],
    },
    Story {
        grade: 4,
        title: "Die Schulbibliothek",
        text: "In der Pause geht Leon oft in die Schulbibliothek. Dort ist es ruhig und gemütlich. Frau Weber, die Bibliothekarin, hilft ihm beim Suchen von spannenden Büchern. Leon liebt Abenteuergeschichten und Sachbücher über Dinosaurier. Jeden Freitag darf er sich zwei Bücher ausleihen. Seine Lieblingsbücher nimmt er auch mit nach Hause, um sie seinen Eltern vorzulesen.",
        questions: &[
            ReadingQuestion {
                question: "Wann geht Leon in die Bibliothek?",
                answers: ["nach der Schule", "in der Pause", "am Wochenende", "am Morgen"],
                correct: 1,
            },
            ReadingQuestion {
                question: "Welche Bücher mag Leon besonders?",
                answers: ["Märchen", "Kochbücher", "Abenteuergeschichten", "Comics"],
                correct: 2,
            },
            ReadingQuestion {
                question: "Wie viele Bücher darf Leon freitags ausleihen?",
                answers: ["eins", "zwei", "drei", "vier"],
                correct: 1,
            },
        ],
    },
    Story {
        grade: 5,
        title: "Der Waldspaziergang",
        text: "Am Samstagnachmittag unternahm Familie Schmidt einen Spaziergang durch den nahegelegenen Wald. Die herbstlichen Blätter in verschiedenen Farbtönen – von goldgelb bis rotbraun – bedeckten den Waldboden wie ein bunter Teppich. Plötzlich entdeckte der zehnjährige Jonas ein Eichhörnchen, das geschickt von Ast zu Ast sprang und Nüsse sammelte. \"Das Eichhörnchen bereitet sich auf den Winter vor\", erklärte Vater Schmidt. Die Familie beobachtete das flinke Tier noch eine Weile, bevor sie ihren Weg fortsetzten.",
        questions: &[
            ReadingQuestion {
                question: "Wann machte die Familie den Spaziergang?",
                answers: ["Sonntagmorgen", "Samstagnachmittag", "Freitagabend", "Montagvormittag"],
                correct: 1,
            },
            ReadingQuestion {
                question: "Welche Jahreszeit wird im Text beschrieben?",
                answers: ["Frühling", "Sommer", "Herbst", "Winter"],
                correct: 2,
            },
            ReadingQuestion {
                question: "Was macht das Eichhörnchen?",
                answers: ["Es schläft", "Es sammelt Nüsse", "Es baut ein Nest", "Es frisst Blätter"],
                correct: 1,
            },
            ReadingQuestion {
                question: "Warum sammelt das Eichhörnchen Nüsse?",
                answers: ["Zum Spielen", "Zur Vorbereitung auf den Winter", "Für seine Freunde", "Weil es Hunger hat"],
                correct: 1,
            },
        ],
    },
];

pub fn stories_for_grade(grade: u8) -> Vec<&'static Story> {
    STORIES.iter().filter(|story| story.grade == grade).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grade_has_a_story() {
        for grade in GRADES.iter() {
            assert!(!stories_for_grade(grade.id).is_empty(), "grade {}", grade.id);
        }
    }

    #[test]
    fn test_correct_answer_indices_are_in_range() {
        for story in STORIES.iter() {
            assert!((2..=4).contains(&story.questions.len()), "{}", story.title);
            for question in story.questions {
                assert!(question.correct < question.answers.len());
            }
        }
    }
}
