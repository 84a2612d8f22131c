use super::timers::TimerSet;
use crate::destroyable::Destroyable;
use crate::events::{EventObserver, Unsubscriber};
use crate::game::settings::Settings;
use crate::model::{GameEvent, Notification, NotificationKind};
use gtk4::prelude::*;
use gtk4::{Align, Label, Orientation, Revealer, RevealerTransitionType};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// Shows `GameEvent::Notify` messages floating over the top of the window.
pub struct ToastUI {
    pub revealer: Revealer,
    message: Label,
    description: Label,
    timers: TimerSet,
    settings: Rc<RefCell<Settings>>,
    subscription: Option<Unsubscriber<GameEvent>>,
}

impl Destroyable for ToastUI {
    fn destroy(&mut self) {
        self.timers.clear();
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

fn css_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
        NotificationKind::Info => "accent",
    }
}

impl ToastUI {
    pub fn new(
        game_observer: EventObserver<GameEvent>,
        settings: Rc<RefCell<Settings>>,
    ) -> Rc<RefCell<Self>> {
        let message = Label::builder().css_classes(["heading"]).wrap(true).build();
        let description = Label::builder().wrap(true).visible(false).build();
        let content = gtk4::Box::builder()
            .orientation(Orientation::Vertical)
            .spacing(4)
            .margin_top(8)
            .margin_bottom(8)
            .margin_start(16)
            .margin_end(16)
            .css_classes(["toast", "card"])
            .build();
        content.append(&message);
        content.append(&description);

        let revealer = Revealer::builder()
            .child(&content)
            .halign(Align::Center)
            .valign(Align::Start)
            .margin_top(12)
            .transition_type(RevealerTransitionType::SlideDown)
            .reveal_child(false)
            .can_target(false)
            .build();

        let toast = Rc::new(RefCell::new(Self {
            revealer,
            message,
            description,
            timers: TimerSet::default(),
            settings,
            subscription: None,
        }));

        let weak = Rc::downgrade(&toast);
        let subscription = game_observer.subscribe(move |event| {
            if let GameEvent::Notify(notification) = event {
                if let Some(toast) = weak.upgrade() {
                    toast.borrow().show(notification);
                }
            }
        });
        toast.borrow_mut().subscription = Some(subscription);
        toast
    }

    pub fn show(&self, notification: &Notification) {
        trace!(target: "toast", "Showing {:?}", notification);
        self.timers.clear();

        for kind in [
            NotificationKind::Success,
            NotificationKind::Error,
            NotificationKind::Info,
        ] {
            self.message.remove_css_class(css_class(kind));
        }
        self.message.add_css_class(css_class(notification.kind));
        self.message.set_label(&notification.message);
        match &notification.description {
            Some(description) => {
                self.description.set_label(description);
                self.description.set_visible(true);
            }
            None => self.description.set_visible(false),
        }
        self.revealer.set_reveal_child(true);

        if notification.kind == NotificationKind::Error && self.settings.borrow().sound_enabled {
            self.revealer.error_bell();
        }

        let revealer = self.revealer.clone();
        self.timers.once(notification.duration, move || {
            revealer.set_reveal_child(false);
        });
    }
}
