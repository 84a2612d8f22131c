use super::audio_set::AudioSet;
use super::helpers::{
    after, big_button, body, chip, clear_box, emoji, finish_buttons, hbox, heading, on_click,
    outline_button, subheading, swatch_button, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::sequence::{COLOR_PADS, HOW_TO_PLAY};
use crate::events::EventHandler;
use crate::game::profile::{address_player, cheer_player};
use crate::game::sequence::{SequenceCommand, SequenceGame, NEXT_LEVEL_DELAY, PRESS_LIT};
use crate::model::{GameId, GamePhase};
use gtk4::prelude::*;
use gtk4::Grid;
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct SequencePage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: SequenceGame,
    timers: TimerSet,
    audio: AudioSet,
    lit: Option<usize>,
}

impl SequencePage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = SequenceGame::new(ctx.game_events.clone(), ctx.seed);
        let audio = AudioSet::new(ctx.settings.clone());
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
            audio,
            lit: None,
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: SequenceCommand) {
        let (before, after_phase) = {
            let mut this = page.borrow_mut();
            let before = this.engine.phase();
            this.engine.handle_event(&command);
            (before, this.engine.phase())
        };

        if after_phase == GamePhase::Showing && before != GamePhase::Showing {
            let delay = if before == GamePhase::Playing {
                NEXT_LEVEL_DELAY
            } else {
                Duration::ZERO
            };
            let mut this = page.borrow_mut();
            this.timers.clear();
            this.lit = None;
            after(&this.timers, delay, page, |page| Self::play_back(page));
        } else if !after_phase.is_active() {
            let mut this = page.borrow_mut();
            this.timers.clear();
            this.lit = None;
        }
        Self::render(page);
    }

    /// Lights the pads one after another, then hands the turn to the player.
    fn play_back(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        trace!(target: "sequence_page", "Playing back {:?}", this.engine.sequence());
        for step in this.engine.playback_schedule() {
            after(&this.timers, step.lit_at, page, move |page| {
                Self::light(page, Some(step.pad))
            });
            after(&this.timers, step.unlit_at, page, |page| Self::light(page, None));
        }
        after(&this.timers, this.engine.playback_duration(), page, |page| {
            Self::dispatch(page, SequenceCommand::PlaybackFinished)
        });
    }

    fn light(page: &Rc<RefCell<Self>>, pad: Option<usize>) {
        {
            let mut this = page.borrow_mut();
            if let Some(pad) = pad {
                this.audio.play_pad(pad);
            }
            this.lit = pad;
        }
        Self::render(page);
    }

    fn press(page: &Rc<RefCell<Self>>, pad: usize) {
        if page.borrow().engine.phase() != GamePhase::Playing {
            return;
        }
        Self::dispatch(page, SequenceCommand::Press(pad));
        Self::light(page, Some(pad));
        let this = page.borrow();
        after(&this.timers, PRESS_LIT, page, |page| Self::light(page, None));
    }

    fn render(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        clear_box(&this.root);
        let content = match this.engine.phase() {
            GamePhase::Showing | GamePhase::Playing => this.playing_view(page),
            GamePhase::Finished => this.finished_view(page),
            _ => this.menu_view(page),
        };
        this.root.append(&content);
    }

    fn menu_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji("🎵", "xx-large"));
        view.append(&heading(GameId::Sequence.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Merke dir die Reihenfolge der Farben!",
        )));
        let how_to = vbox(4);
        how_to.add_css_class("card");
        for line in HOW_TO_PLAY.iter() {
            how_to.append(&body(line));
        }
        view.append(&how_to);
        if self.engine.high_score() > 0 {
            view.append(&chip(&format!("🏆 Rekord: Level {}", self.engine.high_score())));
        }
        let start = big_button("▶️ Spiel starten");
        on_click(&start, page, |page| Self::dispatch(page, SequenceCommand::Start));
        view.append(&start);
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Sequence) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let status = hbox(8);
        status.append(&chip(&format!("Level {}", self.engine.level())));
        status.append(&chip(&format!("🏆 {}", self.engine.high_score())));
        view.append(&status);

        let showing = self.engine.phase() == GamePhase::Showing;
        view.append(&subheading(if showing {
            "👀 Schau genau hin..."
        } else {
            "🎯 Jetzt bist du dran!"
        }));
        if !showing {
            view.append(&body(&format!(
                "{} von {}",
                self.engine.input_len(),
                self.engine.sequence().len()
            )));
        }

        let pads = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .halign(gtk4::Align::Center)
            .build();
        for (index, pad) in COLOR_PADS.iter().enumerate() {
            let lit = self.lit == Some(index);
            let button = swatch_button(pad.color, if lit { "✨" } else { "  " }, 6);
            button.set_tooltip_text(Some(pad.name));
            button.set_opacity(if lit || !showing { 1.0 } else { 0.5 });
            button.set_sensitive(!showing);
            on_click(&button, page, move |page| Self::press(page, index));
            pads.attach(&button, (index % 2) as i32, (index / 2) as i32, 1, 1);
        }
        view.append(&pads);

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji(
            if self.engine.is_new_record() { "🏆" } else { "🎵" },
            "xx-large",
        ));
        let name = self.ctx.player_name();
        view.append(&heading(&cheer_player(name.as_ref(), "Gut gespielt")));
        view.append(&subheading(&format!(
            "Du hast Level {} erreicht!",
            self.engine.level()
        )));
        if self.engine.is_new_record() {
            view.append(&body("🎉 Neuer Rekord!"));
        }
        view.append(&finish_buttons(
            page,
            |page| Self::dispatch(page, SequenceCommand::Start),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Sequence) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, SequenceCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<SequencePage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        SequencePage::render(self);
    }

    fn leave(&self) {
        SequencePage::back_to_menu(self);
    }
}
