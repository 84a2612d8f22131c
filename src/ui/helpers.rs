use super::timers::TimerSet;
use crate::model::{Difficulty, Rating};
use glib::ControlFlow;
use gtk4::prelude::*;
use gtk4::{Align, Button, Label, Orientation};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub fn clear_box(container: &gtk4::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

pub fn vbox(spacing: i32) -> gtk4::Box {
    gtk4::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(spacing)
        .halign(Align::Center)
        .build()
}

pub fn hbox(spacing: i32) -> gtk4::Box {
    gtk4::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(spacing)
        .halign(Align::Center)
        .build()
}

pub fn heading(text: &str) -> Label {
    Label::builder()
        .label(text)
        .css_classes(["title-1"])
        .wrap(true)
        .justify(gtk4::Justification::Center)
        .build()
}

pub fn subheading(text: &str) -> Label {
    Label::builder()
        .label(text)
        .css_classes(["title-3"])
        .wrap(true)
        .justify(gtk4::Justification::Center)
        .build()
}

pub fn body(text: &str) -> Label {
    Label::builder()
        .label(text)
        .wrap(true)
        .max_width_chars(60)
        .justify(gtk4::Justification::Center)
        .build()
}

/// Large emoji, sized with markup.
pub fn emoji(text: &str, size: &str) -> Label {
    let label = Label::new(None);
    label.set_markup(&format!(
        "<span size=\"{}\">{}</span>",
        size,
        glib::markup_escape_text(text)
    ));
    label
}

pub fn chip(text: &str) -> Label {
    Label::builder()
        .label(text)
        .css_classes(["heading", "card"])
        .margin_start(6)
        .margin_end(6)
        .build()
}

pub fn big_button(label: &str) -> Button {
    Button::builder()
        .label(label)
        .css_classes(["pill", "suggested-action"])
        .build()
}

pub fn outline_button(label: &str) -> Button {
    Button::builder().label(label).css_classes(["pill"]).build()
}

/// Button whose face is a coloured block, with optional text on top.
pub fn swatch_button(hex: &str, text: &str, width_chars: usize) -> Button {
    let padding = " ".repeat(width_chars);
    let label = Label::new(None);
    label.set_markup(&format!(
        "<span background=\"{}\" size=\"x-large\">{}{}{}</span>",
        hex,
        padding,
        glib::markup_escape_text(text),
        padding
    ));
    Button::builder().child(&label).build()
}

/// Emoji, headline and rating message shown on every finish screen.
pub fn rating_view(rating: &Rating, headline: &str, score_line: &str) -> gtk4::Box {
    let container = vbox(12);
    container.append(&emoji(rating.emoji, "xx-large"));
    container.append(&heading(headline));
    container.append(&subheading(score_line));
    container.append(&body(rating.message));
    container
}

/// Runs `action` with the page when the button is clicked, as long as the
/// page is still alive.
pub fn on_click<P: 'static>(
    button: &Button,
    page: &Rc<RefCell<P>>,
    action: impl Fn(&Rc<RefCell<P>>) + 'static,
) {
    let weak = Rc::downgrade(page);
    button.connect_clicked(move |_| {
        if let Some(page) = weak.upgrade() {
            action(&page);
        }
    });
}

/// Like `on_click`, for a one-shot timer owned by `timers`.
pub fn after<P: 'static>(
    timers: &TimerSet,
    delay: Duration,
    page: &Rc<RefCell<P>>,
    action: impl FnOnce(&Rc<RefCell<P>>) + 'static,
) {
    let weak = Rc::downgrade(page);
    timers.once(delay, move || {
        if let Some(page) = weak.upgrade() {
            action(&page);
        }
    });
}

/// Like `on_click`, for a repeating timer; stops once the page is gone or
/// `action` breaks.
pub fn every<P: 'static>(
    timers: &TimerSet,
    interval: Duration,
    page: &Rc<RefCell<P>>,
    action: impl Fn(&Rc<RefCell<P>>) -> ControlFlow + 'static,
) {
    let weak = Rc::downgrade(page);
    timers.every(interval, move || match weak.upgrade() {
        Some(page) => action(&page),
        None => ControlFlow::Break,
    });
}

/// One button per difficulty, labelled with its emoji and name.
pub fn difficulty_buttons<P: 'static>(
    page: &Rc<RefCell<P>>,
    label: impl Fn(Difficulty) -> String,
    action: impl Fn(&Rc<RefCell<P>>, Difficulty) + 'static,
) -> gtk4::Box {
    let row = hbox(12);
    let action = Rc::new(action);
    for difficulty in Difficulty::all() {
        let button = big_button(&label(difficulty));
        let action = action.clone();
        on_click(&button, page, move |page| action(page, difficulty));
        row.append(&button);
    }
    row
}

pub fn default_difficulty_label(difficulty: Difficulty) -> String {
    format!("{} {}", difficulty.emoji(), difficulty.name())
}

/// "Nochmal spielen" and "Zurück zum Menü" under a finish screen.
pub fn finish_buttons<P: 'static>(
    page: &Rc<RefCell<P>>,
    replay: impl Fn(&Rc<RefCell<P>>) + 'static,
    menu: impl Fn(&Rc<RefCell<P>>) + 'static,
) -> gtk4::Box {
    let row = hbox(12);
    let again = big_button("🔄 Nochmal spielen");
    on_click(&again, page, replay);
    let back = outline_button("📋 Zurück zum Menü");
    on_click(&back, page, menu);
    row.append(&again);
    row.append(&back);
    row
}
