use super::helpers::{
    body, chip, clear_box, difficulty_buttons, emoji, every, finish_buttons, hbox, heading,
    on_click, outline_button, rating_view, subheading, swatch_button, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::puzzle::PUZZLE_THEMES;
use crate::events::EventHandler;
use crate::game::profile::{address_player, cheer_player};
use crate::game::puzzle::{self, PuzzleCommand, PuzzleGame};
use crate::helpers::format_clock;
use crate::model::{GameId, GamePhase};
use glib::ControlFlow;
use gtk4::prelude::*;
use gtk4::{Button, Grid};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct PuzzlePage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: PuzzleGame,
    timers: TimerSet,
}

impl PuzzlePage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = PuzzleGame::new(ctx.game_events.clone(), ctx.seed);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: PuzzleCommand) {
        let (before, after_phase) = {
            let mut this = page.borrow_mut();
            let before = this.engine.phase();
            this.engine.handle_event(&command);
            (before, this.engine.phase())
        };
        let restarted = matches!(command, PuzzleCommand::Start(_) | PuzzleCommand::Reshuffle);
        if restarted && after_phase == GamePhase::Playing {
            Self::start_clock(page);
        } else if before == GamePhase::Playing && after_phase != GamePhase::Playing {
            page.borrow().timers.clear();
        }
        Self::render(page);
    }

    fn start_clock(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        this.timers.clear();
        every(&this.timers, TICK_INTERVAL, page, |page| {
            Self::dispatch(page, PuzzleCommand::Tick);
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
        view.append(&emoji("🧩", "xx-large"));
        view.append(&heading(GameId::Puzzle.title()));
        let name = self.ctx.player_name();

        match self.engine.theme() {
            None => {
                view.append(&subheading(&address_player(
                    name.as_ref(),
                    "Wähle dein Lieblingsthema!",
                )));
                let themes = Grid::builder()
                    .row_spacing(12)
                    .column_spacing(12)
                    .halign(gtk4::Align::Center)
                    .build();
                for (index, theme) in PUZZLE_THEMES.iter().enumerate() {
                    let content = vbox(4);
                    content.append(&emoji(theme.emoji, "xx-large"));
                    content.append(&subheading(theme.name));
                    let button = Button::builder().child(&content).css_classes(["card"]).build();
                    on_click(&button, page, move |page| {
                        Self::dispatch(page, PuzzleCommand::SelectTheme(index))
                    });
                    themes.attach(&button, (index % 3) as i32, (index / 3) as i32, 1, 1);
                }
                view.append(&themes);
            }
            Some(theme) => {
                view.append(&subheading(&format!("{} {}", theme.emoji, theme.name)));
                view.append(&body("Wähle die Größe des Puzzles!"));
                view.append(&difficulty_buttons(
                    page,
                    |difficulty| {
                        let size = puzzle::board_size(difficulty);
                        format!("{} {} ({}×{})", difficulty.emoji(), difficulty.name(), size, size)
                    },
                    |page, difficulty| Self::dispatch(page, PuzzleCommand::Start(difficulty)),
                ));
                let change = outline_button("🎨 Anderes Thema");
                on_click(&change, page, |page| {
                    Self::dispatch(page, PuzzleCommand::BackToMenu)
                });
                view.append(&change);
            }
        }

        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Puzzle) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let Some(theme) = self.engine.theme() else {
            return view;
        };
        let status = hbox(8);
        status.append(&chip(&format!("{} {}", theme.emoji, theme.name)));
        status.append(&chip(&format!("🔄 Züge: {}", self.engine.moves())));
        status.append(&chip(&format!(
            "⏱️ {}",
            format_clock(self.engine.elapsed_secs())
        )));
        view.append(&status);

        let board = self.engine.board();
        let size = board.size();
        let grid = Grid::builder()
            .row_spacing(4)
            .column_spacing(4)
            .halign(gtk4::Align::Center)
            .build();
        for (index, tile) in board.tiles().iter().enumerate() {
            let (column, row) = ((index % size) as i32, (index / size) as i32);
            let Some(tile) = tile else {
                continue;
            };
            let button = swatch_button(theme.tile_color(*tile), &(tile + 1).to_string(), 2);
            on_click(&button, page, move |page| {
                Self::dispatch(page, PuzzleCommand::SlideTile(index))
            });
            grid.attach(&button, column, row, 1, 1);
        }
        view.append(&grid);

        let controls = hbox(12);
        let reshuffle = outline_button("🔀 Neu mischen");
        on_click(&reshuffle, page, |page| {
            Self::dispatch(page, PuzzleCommand::Reshuffle)
        });
        controls.append(&reshuffle);
        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        controls.append(&back);
        view.append(&controls);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let moves = self.engine.moves();
        let secs = self.engine.elapsed_secs();
        let name = self.ctx.player_name();
        let view = rating_view(
            &puzzle::rating(moves),
            &cheer_player(name.as_ref(), "Puzzle gelöst"),
            &format!("{} Züge in {}", moves, format_clock(secs)),
        );
        view.append(&chip(&format!("⭐ Punkte: {}", puzzle::score(moves, secs))));
        view.append(&finish_buttons(
            page,
            |page| Self::dispatch(page, PuzzleCommand::Reshuffle),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Puzzle) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, PuzzleCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<PuzzlePage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        PuzzlePage::render(self);
    }

    fn leave(&self) {
        PuzzlePage::back_to_menu(self);
    }
}
