use crate::destroyable::Destroyable;
use crate::events::EventEmitter;
use crate::game::settings::Settings;
use crate::model::GlobalEvent;
use crate::storage::KeyValueStore;
use gio::{Menu, SimpleAction};
use glib::prelude::ToVariant;
use gtk4::{prelude::*, ApplicationWindow};
use log::error;
use std::cell::RefCell;
use std::rc::Rc;

const ACTION_SOUND: &str = "toggle-sound";
const ACTION_VISUAL_MATH: &str = "toggle-visual-math";

pub struct SettingsMenuUI {
    window: ApplicationWindow,
    menu: Menu,
    actions: Vec<SimpleAction>,
}

impl Destroyable for SettingsMenuUI {
    fn destroy(&mut self) {
        for action in self.actions.drain(..) {
            self.window.remove_action(&action.name());
        }
    }
}

fn toggle_action<F>(name: &str, initial: bool, apply: F) -> SimpleAction
where
    F: Fn(bool) + 'static,
{
    let action = SimpleAction::new_stateful(name, None, &initial.to_variant());
    action.connect_activate(move |action, _| {
        let current = action
            .state()
            .and_then(|state| state.get::<bool>())
            .unwrap_or(false);
        let enabled = !current;
        action.set_state(&enabled.to_variant());
        apply(enabled);
    });
    action
}

impl SettingsMenuUI {
    pub fn new(
        window: &ApplicationWindow,
        global_events: EventEmitter<GlobalEvent>,
        settings: Rc<RefCell<Settings>>,
        store: Rc<dyn KeyValueStore>,
    ) -> Self {
        let menu = Menu::new();
        menu.append(Some("🔊 Töne"), Some(&format!("win.{ACTION_SOUND}")));
        menu.append(
            Some("🍎 Obst & Gemüse zählen"),
            Some(&format!("win.{ACTION_VISUAL_MATH}")),
        );

        let update = {
            let settings = settings.clone();
            move |change: &dyn Fn(&mut Settings)| {
                let snapshot = {
                    let mut settings = settings.borrow_mut();
                    change(&mut settings);
                    if let Err(err) = settings.save(store.as_ref()) {
                        error!(target: "settings", "Failed to save settings: {}", err);
                    }
                    settings.clone()
                };
                global_events.emit(GlobalEvent::SettingsChanged(snapshot));
            }
        };
        let update = Rc::new(update);

        let (sound_enabled, visual_mode) = {
            let settings = settings.borrow();
            (settings.sound_enabled, settings.math_visual_mode)
        };

        let sound = {
            let update = update.clone();
            toggle_action(ACTION_SOUND, sound_enabled, move |enabled| {
                update(&|settings: &mut Settings| settings.sound_enabled = enabled)
            })
        };
        let visual = {
            let update = update.clone();
            toggle_action(ACTION_VISUAL_MATH, visual_mode, move |enabled| {
                update(&|settings: &mut Settings| settings.math_visual_mode = enabled)
            })
        };

        window.add_action(&sound);
        window.add_action(&visual);

        Self {
            window: window.clone(),
            menu,
            actions: vec![sound, visual],
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}
