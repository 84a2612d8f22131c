use super::helpers::{
    after, chip, clear_box, difficulty_buttons, emoji, every, finish_buttons, hbox, heading,
    on_click, outline_button, rating_view, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::memory::CARD_BACK;
use crate::events::EventHandler;
use crate::game::memory::{self, MemoryCommand, MemoryGame, MISMATCH_DELAY, TICK_INTERVAL};
use crate::game::profile::{address_player, cheer_player};
use crate::helpers::format_clock;
use crate::model::{GameId, GamePhase};
use glib::ControlFlow;
use gtk4::prelude::*;
use gtk4::{Button, Grid};
use std::cell::RefCell;
use std::rc::Rc;

pub struct MemoryPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: MemoryGame,
    timers: TimerSet,
}

impl MemoryPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = MemoryGame::new(ctx.game_events.clone(), ctx.seed);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: MemoryCommand) {
        let (before, after_phase, started_check) = {
            let mut this = page.borrow_mut();
            let before = this.engine.phase();
            let was_checking = this.engine.is_checking();
            this.engine.handle_event(&command);
            (
                before,
                this.engine.phase(),
                !was_checking && this.engine.is_checking(),
            )
        };

        if matches!(command, MemoryCommand::Start(_)) && after_phase == GamePhase::Playing {
            Self::start_clock(page);
        } else if before == GamePhase::Playing && after_phase != GamePhase::Playing {
            page.borrow().timers.clear();
        }
        if started_check {
            let this = page.borrow();
            after(&this.timers, MISMATCH_DELAY, page, |page| {
                Self::dispatch(page, MemoryCommand::ConcealMismatch)
            });
        }
        Self::render(page);
    }

    fn start_clock(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        this.timers.clear();
        every(&this.timers, TICK_INTERVAL, page, |page| {
            Self::dispatch(page, MemoryCommand::Tick);
            if page.borrow().engine.phase() == GamePhase::Playing {
                ControlFlow::Continue
            } else {
                ControlFlow::Break
            }
        });
    }

    fn render(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        clear_box(&this.root);
        let content = match this.engine.phase() {
            GamePhase::Playing => this.playing_view(page),
            GamePhase::Finished => this.finished_view(page),
            _ => this.menu_view(page),
        };
        this.root.append(&content);
    }

    fn menu_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji("🧠", "xx-large"));
        view.append(&heading(GameId::Memory.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Finde alle passenden Paare!",
        )));
        view.append(&difficulty_buttons(
            page,
            |difficulty| {
                format!(
                    "{} {} ({} Paare)",
                    difficulty.emoji(),
                    difficulty.name(),
                    memory::pair_count(difficulty)
                )
            },
            |page, difficulty| Self::dispatch(page, MemoryCommand::Start(difficulty)),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Memory) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let status = hbox(8);
        status.append(&chip(&format!("🔄 Züge: {}", self.engine.moves())));
        status.append(&chip(&format!(
            "⏱️ {}",
            format_clock(self.engine.elapsed_secs())
        )));
        status.append(&chip(&format!(
            "✅ {} / {}",
            self.engine.matched_pairs(),
            memory::pair_count(self.engine.difficulty())
        )));
        view.append(&status);

        let grid = Grid::builder()
            .row_spacing(8)
            .column_spacing(8)
            .halign(gtk4::Align::Center)
            .build();
        let columns = memory::columns(self.engine.difficulty());
        for (index, card) in self.engine.cards().iter().enumerate() {
            let face = if self.engine.is_face_up(index) {
                card.emoji
            } else {
                CARD_BACK
            };
            let button = Button::builder()
                .child(&emoji(face, "xx-large"))
                .width_request(80)
                .height_request(80)
                .build();
            if card.matched {
                button.add_css_class("success");
                button.set_sensitive(false);
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, MemoryCommand::Flip(index))
            });
            grid.attach(
                &button,
                (index % columns) as i32,
                (index / columns) as i32,
                1,
                1,
            );
        }
        view.append(&grid);

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let moves = self.engine.moves();
        let name = self.ctx.player_name();
        let view = rating_view(
            &memory::rating(moves, self.engine.cards().len()),
            &cheer_player(name.as_ref(), "Super"),
            &format!(
                "{} Züge in {}",
                moves,
                format_clock(self.engine.elapsed_secs())
            ),
        );
        let difficulty = self.engine.difficulty();
        view.append(&finish_buttons(
            page,
            move |page| Self::dispatch(page, MemoryCommand::Start(difficulty)),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Memory) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, MemoryCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<MemoryPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        MemoryPage::render(self);
    }

    fn leave(&self) {
        MemoryPage::back_to_menu(self);
    }
}
