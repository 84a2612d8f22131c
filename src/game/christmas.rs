use crate::content::christmas::{Decoration, ROOM_DECORATIONS, TREE_DECORATIONS};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, Notification};
use log::{debug, trace};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorationCategory {
    #[default]
    Tree,
    Room,
}

impl DecorationCategory {
    pub fn all() -> [DecorationCategory; 2] {
        [DecorationCategory::Tree, DecorationCategory::Room]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DecorationCategory::Tree => "🎄 Baum",
            DecorationCategory::Room => "🏠 Zimmer",
        }
    }

    pub fn decorations(&self) -> &'static [Decoration] {
        match self {
            DecorationCategory::Tree => &TREE_DECORATIONS,
            DecorationCategory::Room => &ROOM_DECORATIONS,
        }
    }
}

fn find_decoration(id: &str) -> Option<&'static Decoration> {
    TREE_DECORATIONS
        .iter()
        .chain(ROOM_DECORATIONS.iter())
        .find(|decoration| decoration.id == id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDecoration {
    pub id: Uuid,
    pub decoration: &'static Decoration,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChristmasCommand {
    SelectCategory(DecorationCategory),
    Place {
        decoration_id: String,
        x: f64,
        y: f64,
    },
    Remove(Uuid),
    Undo,
    ClearAll,
}

/// Free-play scene; nothing here is scored.
pub struct ChristmasScene {
    emitter: EventEmitter<GameEvent>,
    category: DecorationCategory,
    placed: Vec<PlacedDecoration>,
}

impl ChristmasScene {
    pub fn new(emitter: EventEmitter<GameEvent>) -> Self {
        Self {
            emitter,
            category: DecorationCategory::default(),
            placed: Vec::new(),
        }
    }

    pub fn category(&self) -> DecorationCategory {
        self.category
    }

    /// In placement order, oldest first.
    pub fn placed(&self) -> &[PlacedDecoration] {
        &self.placed
    }

    fn notify(&self, notification: Notification) {
        self.emitter.emit(GameEvent::Notify(notification));
        self.emitter.emit(GameEvent::Updated(GameId::Christmas));
    }

    fn place(&mut self, decoration_id: &str, x: f64, y: f64) {
        let Some(decoration) = find_decoration(decoration_id) else {
            debug!(target: "christmas", "Unknown decoration {}", decoration_id);
            return;
        };
        let placed = PlacedDecoration {
            id: Uuid::new_v4(),
            decoration,
            x,
            y,
        };
        trace!(target: "christmas", "Placed {:?}", placed);
        self.placed.push(placed);
        self.notify(Notification::success(format!(
            "{} platziert! 🎄✨",
            decoration.name
        )));
    }

    fn remove(&mut self, id: Uuid) {
        let before = self.placed.len();
        self.placed.retain(|placed| placed.id != id);
        if self.placed.len() != before {
            self.notify(Notification::info("Dekoration entfernt! 🗑️"));
        }
    }
}

impl EventHandler<ChristmasCommand> for ChristmasScene {
    fn handle_event(&mut self, event: &ChristmasCommand) {
        match event {
            ChristmasCommand::SelectCategory(category) => {
                self.category = *category;
                self.emitter.emit(GameEvent::Updated(GameId::Christmas));
            }
            ChristmasCommand::Place {
                decoration_id,
                x,
                y,
            } => self.place(decoration_id, *x, *y),
            ChristmasCommand::Remove(id) => self.remove(*id),
            ChristmasCommand::Undo => {
                if let Some(placed) = self.placed.pop() {
                    self.notify(Notification::info(format!(
                        "{} zurückgenommen! ↩️",
                        placed.decoration.name
                    )));
                }
            }
            ChristmasCommand::ClearAll => {
                self.placed.clear();
                self.notify(Notification::success("Alles zurückgesetzt! 🔄"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scene() -> (ChristmasScene, Rc<RefCell<Vec<String>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let messages = Rc::new(RefCell::new(Vec::new()));
        let messages_clone = messages.clone();
        observer.subscribe(move |event| {
            if let GameEvent::Notify(notification) = event {
                messages_clone.borrow_mut().push(notification.message.clone());
            }
        });
        (ChristmasScene::new(emitter), messages)
    }

    fn place(scene: &mut ChristmasScene, id: &str) {
        scene.handle_event(&ChristmasCommand::Place {
            decoration_id: id.to_string(),
            x: 10.0,
            y: 20.0,
        });
    }

    #[test]
    fn test_each_placement_gets_unique_id() {
        let (mut scene, messages) = scene();
        let id = TREE_DECORATIONS[0].id;
        place(&mut scene, id);
        place(&mut scene, id);
        assert_eq!(scene.placed().len(), 2);
        assert_ne!(scene.placed()[0].id, scene.placed()[1].id);
        assert_eq!(
            messages.borrow()[0],
            format!("{} platziert! 🎄✨", TREE_DECORATIONS[0].name)
        );
    }

    #[test]
    fn test_unknown_decoration_is_ignored() {
        let (mut scene, messages) = scene();
        place(&mut scene, "no-such-thing");
        assert!(scene.placed().is_empty());
        assert!(messages.borrow().is_empty());
    }

    #[test]
    fn test_remove_undo_and_clear() {
        let (mut scene, messages) = scene();
        place(&mut scene, TREE_DECORATIONS[1].id);
        place(&mut scene, ROOM_DECORATIONS[0].id);
        place(&mut scene, ROOM_DECORATIONS[1].id);

        let first = scene.placed()[0].id;
        scene.handle_event(&ChristmasCommand::Remove(first));
        assert_eq!(scene.placed().len(), 2);
        assert_eq!(messages.borrow().last().unwrap(), "Dekoration entfernt! 🗑️");

        scene.handle_event(&ChristmasCommand::Undo);
        assert_eq!(scene.placed().len(), 1);
        assert_eq!(scene.placed()[0].decoration, &ROOM_DECORATIONS[0]);

        scene.handle_event(&ChristmasCommand::ClearAll);
        assert!(scene.placed().is_empty());
        assert_eq!(messages.borrow().last().unwrap(), "Alles zurückgesetzt! 🔄");
    }

    #[test]
    fn test_category_lists() {
        assert_eq!(DecorationCategory::Tree.decorations().len(), 10);
        assert_eq!(DecorationCategory::Room.decorations().len(), 8);
    }
}
