use crate::events::EventEmitter;
use crate::game::profile::PlayerProfile;
use crate::model::{GameEvent, GlobalEvent, Notification, MAX_NAME_CHARS};
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Dialog, Entry, Label};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// Asks for the player's name. Without a stored name the dialog cannot be
/// dismissed until a valid one is entered.
pub struct ProfileDialog {
    window: ApplicationWindow,
    profile: Rc<RefCell<PlayerProfile>>,
    game_events: EventEmitter<GameEvent>,
    global_events: EventEmitter<GlobalEvent>,
}

impl ProfileDialog {
    pub fn new(
        window: &ApplicationWindow,
        profile: Rc<RefCell<PlayerProfile>>,
        game_events: EventEmitter<GameEvent>,
        global_events: EventEmitter<GlobalEvent>,
    ) -> Self {
        Self {
            window: window.clone(),
            profile,
            game_events,
            global_events,
        }
    }

    pub fn show(&self) {
        let current = self.profile.borrow().name().cloned();
        let (title, prompt) = match current {
            Some(_) => ("Name ändern", "Wie möchtest du jetzt heißen?"),
            None => ("Hallo! 👋", "Wie heißt du?"),
        };

        let dialog = Dialog::builder()
            .title(title)
            .transient_for(&self.window)
            .modal(true)
            .deletable(current.is_some())
            .build();

        dialog.add_button("Speichern", gtk4::ResponseType::Ok);
        if current.is_some() {
            dialog.add_button("Abbrechen", gtk4::ResponseType::Cancel);
        }
        dialog.set_default_response(gtk4::ResponseType::Ok);

        let content_area = dialog.content_area();
        content_area.set_spacing(8);
        content_area.set_margin_top(12);
        content_area.set_margin_bottom(12);
        content_area.set_margin_start(12);
        content_area.set_margin_end(12);

        content_area.append(&Label::builder().label(prompt).css_classes(["title-3"]).build());
        let entry = Entry::builder()
            .text(current.as_ref().map_or("", |name| name.as_str()))
            .placeholder_text("Dein Name")
            .max_length(MAX_NAME_CHARS as i32)
            .activates_default(true)
            .build();
        content_area.append(&entry);
        let error_label = Label::builder()
            .css_classes(["error"])
            .visible(false)
            .build();
        content_area.append(&error_label);

        let profile = self.profile.clone();
        let game_events = self.game_events.clone();
        let global_events = self.global_events.clone();
        dialog.connect_response(move |dialog, response| {
            if response != gtk4::ResponseType::Ok {
                if profile.borrow().name().is_some() {
                    dialog.close();
                }
                return;
            }
            let text = entry.text();
            let result = profile
                .borrow_mut()
                .set_name(text.as_str())
                .cloned();
            match result {
                Ok(name) => {
                    trace!(target: "profile_dialog", "Accepted name {}", name);
                    game_events.emit(GameEvent::Notify(Notification::success(
                        PlayerProfile::welcome_message(&name),
                    )));
                    global_events.emit(GlobalEvent::PlayerNameChanged(name));
                    dialog.close();
                }
                Err(err) => {
                    error_label.set_label(&err.to_string());
                    error_label.set_visible(true);
                }
            }
        });

        dialog.present();
    }
}
