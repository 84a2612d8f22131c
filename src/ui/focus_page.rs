use super::helpers::{
    chip, clear_box, difficulty_buttons, emoji, every, finish_buttons, hbox, heading, on_click,
    outline_button, rating_view, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::events::EventHandler;
use crate::game::focus::{self, FocusCommand, FocusGame, TargetPosition, TICK_INTERVAL};
use crate::game::profile::{address_player, cheer_player};
use crate::model::{GameId, GamePhase};
use glib::ControlFlow;
use gtk4::prelude::*;
use gtk4::{Fixed, Frame, GestureClick};
use std::cell::RefCell;
use std::rc::Rc;

const AREA_WIDTH: f64 = 640.0;
const AREA_HEIGHT: f64 = 420.0;
/// Half the rendered target size, in pixels.
const TARGET_RADIUS: f64 = 32.0;

fn target_centre(target: TargetPosition) -> (f64, f64) {
    (
        target.x / 100.0 * AREA_WIDTH,
        target.y / 100.0 * AREA_HEIGHT,
    )
}

fn is_hit(target: TargetPosition, x: f64, y: f64) -> bool {
    let (cx, cy) = target_centre(target);
    (x - cx).hypot(y - cy) <= TARGET_RADIUS
}

pub struct FocusPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: FocusGame,
    timers: TimerSet,
}

impl FocusPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = FocusGame::new(ctx.game_events.clone(), ctx.seed);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: FocusCommand) {
        let (before, after_phase) = {
            let mut this = page.borrow_mut();
            let before = this.engine.phase();
            this.engine.handle_event(&command);
            (before, this.engine.phase())
        };
        if matches!(command, FocusCommand::Start(_)) && after_phase == GamePhase::Playing {
            Self::start_timers(page);
        } else if before == GamePhase::Playing && after_phase != GamePhase::Playing {
            page.borrow().timers.clear();
        }
        Self::render(page);
    }

    fn start_timers(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        this.timers.clear();
        let while_playing = |page: &Rc<RefCell<Self>>| {
            if page.borrow().engine.phase() == GamePhase::Playing {
                ControlFlow::Continue
            } else {
                ControlFlow::Break
            }
        };
        every(&this.timers, TICK_INTERVAL, page, move |page| {
            Self::dispatch(page, FocusCommand::Tick);
            while_playing(page)
        });
        every(
            &this.timers,
            focus::move_interval(this.engine.difficulty()),
            page,
            move |page| {
                Self::dispatch(page, FocusCommand::MoveTarget);
                while_playing(page)
            },
        );
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
        view.append(&emoji("🎯", "xx-large"));
        view.append(&heading(GameId::Focus.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Klicke so schnell wie möglich auf das Ziel!",
        )));
        view.append(&difficulty_buttons(
            page,
            |difficulty| {
                format!(
                    "{} {}",
                    focus::speed_emoji(difficulty),
                    focus::speed_name(difficulty)
                )
            },
            |page, difficulty| Self::dispatch(page, FocusCommand::Start(difficulty)),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Focus) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let status = hbox(8);
        status.append(&chip(&format!("🎯 Punkte: {}", self.engine.score())));
        status.append(&chip(&format!("⏱️ {}s", self.engine.time_left())));
        status.append(&chip(&format!("📊 {}%", self.engine.accuracy())));
        view.append(&status);

        let area = Fixed::builder()
            .width_request(AREA_WIDTH as i32)
            .height_request(AREA_HEIGHT as i32)
            .build();
        let target = emoji("🎯", "xx-large");
        target.set_size_request((TARGET_RADIUS * 2.0) as i32, (TARGET_RADIUS * 2.0) as i32);
        let (cx, cy) = target_centre(self.engine.target());
        area.put(&target, cx - TARGET_RADIUS, cy - TARGET_RADIUS);

        let click = GestureClick::new();
        let weak = Rc::downgrade(page);
        click.connect_pressed(move |_, _, x, y| {
            let Some(page) = weak.upgrade() else {
                return;
            };
            let target = page.borrow().engine.target();
            let command = if is_hit(target, x, y) {
                FocusCommand::Hit
            } else {
                FocusCommand::Miss
            };
            Self::dispatch(&page, command);
        });
        area.add_controller(click);

        let frame = Frame::builder().child(&area).css_classes(["view"]).build();
        view.append(&frame);

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let score = self.engine.score();
        let name = self.ctx.player_name();
        let view = rating_view(
            &focus::rating(score),
            &cheer_player(name.as_ref(), "Zeit ist um"),
            &format!("{} Treffer", score),
        );
        view.append(&chip(&format!("📊 Genauigkeit: {}%", self.engine.accuracy())));
        let difficulty = self.engine.difficulty();
        view.append(&finish_buttons(
            page,
            move |page| Self::dispatch(page, FocusCommand::Start(difficulty)),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Focus) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, FocusCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<FocusPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        FocusPage::render(self);
    }

    fn leave(&self) {
        FocusPage::back_to_menu(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_inside_target_radius_hits() {
        let target = TargetPosition { x: 50.0, y: 50.0 };
        assert!(is_hit(target, AREA_WIDTH / 2.0 + 10.0, AREA_HEIGHT / 2.0 - 10.0));
        assert!(!is_hit(target, AREA_WIDTH / 2.0 + TARGET_RADIUS + 1.0, AREA_HEIGHT / 2.0));
    }
}
