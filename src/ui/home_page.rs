use super::helpers::{body, clear_box, emoji, heading, outline_button, subheading, vbox};
use super::page::{Page, PageContext};
use crate::content::home::{GameCard, APP_TAGLINE, APP_TITLE, GAME_CARDS, HOME_FOOTER};
use crate::model::{GlobalEvent, Route};
use gtk4::prelude::*;
use gtk4::{Button, FlowBox, SelectionMode};
use std::cell::RefCell;
use std::rc::Rc;

pub struct HomePage {
    root: gtk4::Box,
    ctx: PageContext,
}

fn game_card(card: &'static GameCard, ctx: &PageContext) -> Button {
    let content = vbox(6);
    content.append(&emoji(card.emoji, "xx-large"));
    content.append(&subheading(card.game.title()));
    content.append(&body(card.description));

    let button = Button::builder()
        .child(&content)
        .css_classes(["card"])
        .width_request(220)
        .build();
    let global_events = ctx.global_events.clone();
    button.connect_clicked(move |_| {
        global_events.emit(GlobalEvent::Navigate(Route::Game(card.game)));
    });
    button
}

impl HomePage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let root = vbox(18);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        let page = Rc::new(RefCell::new(Self { root, ctx }));
        Self::render(&page);
        page
    }

    fn render(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        clear_box(&this.root);

        this.root.append(&heading(&format!("✨ {} ✨", APP_TITLE)));
        this.root.append(&subheading(APP_TAGLINE));
        let greeting = format!(
            "Hallo, {}! 👋 Was möchtest du heute spielen?",
            this.ctx.profile.borrow().display_name()
        );
        this.root.append(&body(&greeting));

        let cards = FlowBox::builder()
            .selection_mode(SelectionMode::None)
            .homogeneous(true)
            .max_children_per_line(4)
            .min_children_per_line(1)
            .column_spacing(12)
            .row_spacing(12)
            .build();
        for card in GAME_CARDS.iter() {
            cards.insert(&game_card(card, &this.ctx), -1);
        }
        this.root.append(&cards);

        let about = outline_button("ℹ️ Über ENISSA");
        let global_events = this.ctx.global_events.clone();
        about.connect_clicked(move |_| global_events.emit(GlobalEvent::Navigate(Route::About)));
        this.root.append(&about);
        this.root.append(&body(HOME_FOOTER));
    }
}

impl Page for Rc<RefCell<HomePage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        HomePage::render(self);
    }
}
