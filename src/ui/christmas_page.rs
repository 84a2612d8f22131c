use super::helpers::{body, clear_box, emoji, hbox, heading, on_click, outline_button, subheading, vbox};
use super::page::{Page, PageContext};
use crate::events::EventHandler;
use crate::game::christmas::{ChristmasCommand, ChristmasScene, DecorationCategory};
use crate::game::profile::address_player;
use crate::model::GameId;
use gtk4::gdk::{ContentProvider, DragAction};
use gtk4::prelude::*;
use gtk4::{Button, DragSource, DropTarget, Fixed, Frame, Label, Overlay};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

const SCENE_WIDTH: i32 = 720;
const SCENE_HEIGHT: i32 = 460;
/// Offset from a drop point to the top-left corner of the placed item.
const ITEM_OFFSET: f64 = 24.0;

pub struct ChristmasPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: ChristmasScene,
}

fn draggable(id: &'static str, label: &str) -> Label {
    let item = emoji(label, "xx-large");
    let source = DragSource::new();
    source.set_actions(DragAction::COPY);
    source.connect_prepare(move |_, _, _| Some(ContentProvider::for_value(&id.to_value())));
    item.add_controller(source);
    item
}

impl ChristmasPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = ChristmasScene::new(ctx.game_events.clone());
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: ChristmasCommand) {
        page.borrow_mut().engine.handle_event(&command);
        Self::render(page);
    }

    fn render(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        clear_box(&this.root);

        this.root.append(&heading(&format!("🎄 {}", GameId::Christmas.title())));
        let name = this.ctx.player_name();
        this.root.append(&subheading(&address_player(
            name.as_ref(),
            "Dekoriere dein Weihnachtszimmer! 🎄🎅",
        )));

        let tabs = hbox(8);
        for category in DecorationCategory::all() {
            let button = outline_button(category.name());
            if category == this.engine.category() {
                button.add_css_class("suggested-action");
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, ChristmasCommand::SelectCategory(category))
            });
            tabs.append(&button);
        }
        this.root.append(&tabs);

        let palette = hbox(8);
        for decoration in this.engine.category().decorations() {
            let item = draggable(decoration.id, decoration.emoji);
            item.set_tooltip_text(Some(decoration.name));
            palette.append(&item);
        }
        this.root.append(&palette);
        this.root.append(&body("Ziehe die Dekorationen in das Zimmer. Klicke zum Entfernen."));

        this.root.append(&this.scene(page));

        let controls = hbox(12);
        let undo = outline_button("↩️ Rückgängig");
        undo.set_sensitive(!this.engine.placed().is_empty());
        on_click(&undo, page, |page| Self::dispatch(page, ChristmasCommand::Undo));
        controls.append(&undo);
        let clear = outline_button("🔄 Alles zurücksetzen");
        on_click(&clear, page, |page| Self::dispatch(page, ChristmasCommand::ClearAll));
        controls.append(&clear);
        this.root.append(&controls);
    }

    fn scene(&self, page: &Rc<RefCell<Self>>) -> Frame {
        let fixed = Fixed::builder()
            .width_request(SCENE_WIDTH)
            .height_request(SCENE_HEIGHT)
            .build();
        for placed in self.engine.placed() {
            let button = Button::builder()
                .child(&emoji(placed.decoration.emoji, "xx-large"))
                .tooltip_text(placed.decoration.name)
                .css_classes(["flat"])
                .build();
            let id = placed.id;
            on_click(&button, page, move |page| {
                Self::dispatch(page, ChristmasCommand::Remove(id))
            });
            fixed.put(&button, placed.x - ITEM_OFFSET, placed.y - ITEM_OFFSET);
        }

        let drop = DropTarget::new(glib::Type::STRING, DragAction::COPY);
        let weak = Rc::downgrade(page);
        drop.connect_drop(move |_, value, x, y| {
            let (Some(page), Ok(decoration_id)) = (weak.upgrade(), value.get::<String>()) else {
                return false;
            };
            trace!(target: "christmas_page", "Dropped {} at {:.0},{:.0}", decoration_id, x, y);
            let dispatch_page = page.clone();
            // re-rendering removes the drop target, so finish the drop first
            glib::idle_add_local_once(move || {
                Self::dispatch(&dispatch_page, ChristmasCommand::Place { decoration_id, x, y })
            });
            true
        });
        fixed.add_controller(drop);

        let overlay = Overlay::builder().child(&emoji("🏠", "98304")).build();
        overlay.add_overlay(&fixed);
        Frame::builder().child(&overlay).css_classes(["view"]).build()
    }
}

impl Page for Rc<RefCell<ChristmasPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        ChristmasPage::render(self);
    }

    fn leave(&self) {
        let mut page = self.borrow_mut();
        let emitter = page.ctx.game_events.clone();
        page.engine = ChristmasScene::new(emitter);
    }
}
