use super::helpers::{
    big_button, body, chip, clear_box, emoji, every, finish_buttons, hbox, heading, on_click,
    outline_button, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::tooth_brushing::{BRUSHING_STEPS, TEETH_AREAS};
use crate::events::EventHandler;
use crate::game::profile::{address_player, cheer_player};
use crate::game::tooth_brushing::{BrushingCommand, ToothBrushingGame, TICK_INTERVAL};
use crate::helpers::format_seconds;
use crate::model::{GameId, GamePhase};
use glib::ControlFlow;
use gtk4::prelude::*;
use gtk4::{Button, Fixed, Frame, ProgressBar};
use std::cell::RefCell;
use std::rc::Rc;

const MOUTH_WIDTH: f64 = 420.0;
const MOUTH_HEIGHT: f64 = 260.0;
const AREA_BUTTON_SIZE: f64 = 64.0;

pub struct ToothBrushingPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: ToothBrushingGame,
    timers: TimerSet,
}

impl ToothBrushingPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = ToothBrushingGame::new(ctx.game_events.clone());
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: BrushingCommand) {
        let (before, after_phase) = {
            let mut this = page.borrow_mut();
            let before = this.engine.phase();
            this.engine.handle_event(&command);
            (before, this.engine.phase())
        };
        if command == BrushingCommand::Start && after_phase == GamePhase::Playing {
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
            Self::dispatch(page, BrushingCommand::Tick);
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
            GamePhase::Playing => this.brushing_view(page),
            GamePhase::Finished => this.finished_view(page),
            _ => this.menu_view(page),
        };
        this.root.append(&content);
    }

    fn menu_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji("🦷", "xx-large"));
        view.append(&heading(GameId::ToothBrushing.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Lerne richtig Zähne zu putzen!",
        )));

        let steps = vbox(4);
        steps.add_css_class("card");
        for (index, step) in BRUSHING_STEPS.iter().enumerate() {
            steps.append(&body(&format!(
                "{}. {} {} ({})",
                index + 1,
                step.emoji,
                step.title,
                format_seconds(step.duration_secs)
            )));
        }
        view.append(&steps);

        let start = big_button("🪥 Los geht's!");
        on_click(&start, page, |page| Self::dispatch(page, BrushingCommand::Start));
        view.append(&start);
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::ToothBrushing) {
            view.append(&panel);
        }
        view
    }

    fn mouth(&self, page: &Rc<RefCell<Self>>) -> Frame {
        let mouth = Fixed::builder()
            .width_request(MOUTH_WIDTH as i32)
            .height_request(MOUTH_HEIGHT as i32)
            .build();
        for (index, area) in TEETH_AREAS.iter().enumerate() {
            let brushed = self.engine.is_brushed(index);
            let button = Button::builder()
                .child(&emoji(if brushed { "✨" } else { "🦷" }, "x-large"))
                .tooltip_text(area.name)
                .width_request(AREA_BUTTON_SIZE as i32)
                .height_request(AREA_BUTTON_SIZE as i32)
                .sensitive(!brushed)
                .build();
            if brushed {
                button.add_css_class("success");
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, BrushingCommand::BrushArea(index))
            });
            let x = f64::from(area.x) / 100.0 * MOUTH_WIDTH - AREA_BUTTON_SIZE / 2.0;
            let y = f64::from(area.y) / 100.0 * MOUTH_HEIGHT - AREA_BUTTON_SIZE / 2.0;
            mouth.put(&button, x, y);
        }
        Frame::builder().child(&mouth).css_classes(["view"]).build()
    }

    fn brushing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let step = self.engine.step();

        let status = hbox(8);
        status.append(&chip(&format!(
            "Schritt {} von {}",
            self.engine.step_index() + 1,
            BRUSHING_STEPS.len()
        )));
        status.append(&chip(&format!("⏱️ {}", format_seconds(self.engine.time_left()))));
        status.append(&chip(&format!("⭐ {}", self.engine.points())));
        view.append(&status);
        view.append(
            &ProgressBar::builder()
                .fraction(self.engine.progress())
                .width_request(360)
                .build(),
        );

        view.append(&emoji(step.emoji, "xx-large"));
        view.append(&heading(step.title));
        view.append(&body(step.instruction));
        if self.engine.shows_areas() {
            view.append(&body("Tippe auf die Bereiche, die du geputzt hast!"));
            view.append(&self.mouth(page));
        }

        let controls = hbox(12);
        let next = big_button("➡️ Nächster Schritt");
        on_click(&next, page, |page| Self::dispatch(page, BrushingCommand::NextStep));
        controls.append(&next);
        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        controls.append(&back);
        view.append(&controls);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji("🦷✨", "xx-large"));
        let name = self.ctx.player_name();
        view.append(&heading(&cheer_player(name.as_ref(), "Super geputzt")));
        view.append(&subheading(&format!("⭐ {} Punkte", self.engine.points())));
        view.append(&body("Deine Zähne sind jetzt blitzblank! Putze zweimal am Tag. 😁"));
        view.append(&finish_buttons(
            page,
            |page| Self::dispatch(page, BrushingCommand::Start),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::ToothBrushing) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, BrushingCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<ToothBrushingPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        ToothBrushingPage::render(self);
    }

    fn leave(&self) {
        ToothBrushingPage::back_to_menu(self);
    }
}
