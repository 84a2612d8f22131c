use super::helpers::{
    after, big_button, body, chip, clear_box, default_difficulty_label, difficulty_buttons, emoji,
    finish_buttons, hbox, heading, on_click, outline_button, rating_view, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::events::EventHandler;
use crate::game::math::{self, MathCommand, MathGame, MathQuestion, FEEDBACK_DELAY, TOTAL_QUESTIONS};
use crate::game::profile::{address_player, cheer_player};
use crate::model::{GameId, GamePhase};
use gtk4::prelude::*;
use gtk4::ProgressBar;
use std::cell::RefCell;
use std::rc::Rc;

pub struct MathPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: MathGame,
    timers: TimerSet,
}

/// `left` and `right` drawn as rows of the chosen emoji.
fn counters(question: &MathQuestion, item: &str) -> gtk4::Box {
    let row = hbox(12);
    row.append(&emoji(&item.repeat(question.left as usize), "x-large"));
    row.append(&emoji(question.operation.symbol(), "x-large"));
    row.append(&emoji(&item.repeat(question.right as usize), "x-large"));
    row
}

impl MathPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let visual_mode = ctx.settings.borrow().math_visual_mode;
        let engine = MathGame::new(ctx.game_events.clone(), ctx.seed, visual_mode);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: MathCommand) {
        let started_feedback = {
            let mut this = page.borrow_mut();
            let before = this.engine.is_showing_feedback();
            this.engine.handle_event(&command);
            !before && this.engine.is_showing_feedback()
        };
        if started_feedback {
            let this = page.borrow();
            after(&this.timers, FEEDBACK_DELAY, page, |page| {
                Self::dispatch(page, MathCommand::Continue)
            });
        }
        Self::render(page);
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
        view.append(&emoji("🧮", "xx-large"));
        view.append(&heading(GameId::Math.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Wähle deinen Schwierigkeitsgrad!",
        )));
        view.append(&difficulty_buttons(page, default_difficulty_label, |page, difficulty| {
            Self::dispatch(page, MathCommand::Start(difficulty))
        }));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Math) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let Some(question) = self.engine.question() else {
            return view;
        };

        let status = hbox(8);
        status.append(&chip(&format!(
            "Frage {} von {}",
            self.engine.question_number(),
            TOTAL_QUESTIONS
        )));
        status.append(&chip(&format!("⭐ {}", self.engine.score())));
        if self.engine.streak() > 0 {
            status.append(&chip(&format!("🔥 {}", self.engine.streak())));
        }
        view.append(&status);
        view.append(
            &ProgressBar::builder()
                .fraction(self.engine.progress())
                .width_request(360)
                .build(),
        );

        if let Some(item) = self.engine.visual_item() {
            view.append(&counters(question, item.emoji));
            view.append(&body(&format!("Zähle die {}!", item.name)));
        }
        view.append(&heading(&format!(
            "{} {} {} = ?",
            question.left,
            question.operation.symbol(),
            question.right
        )));

        let options = hbox(12);
        let selected = self.engine.selected_answer();
        for &option in question.options.iter() {
            let button = big_button(&option.to_string());
            if let Some(selected) = selected {
                button.set_sensitive(false);
                if option == question.answer {
                    button.add_css_class("success");
                } else if option == selected {
                    button.add_css_class("destructive-action");
                }
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, MathCommand::Answer(option))
            });
            options.append(&button);
        }
        view.append(&options);

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let score = self.engine.score();
        let name = self.ctx.player_name();
        let view = rating_view(
            &math::rating(score),
            &cheer_player(name.as_ref(), "Geschafft"),
            &format!("{} von {} richtig", score, TOTAL_QUESTIONS),
        );
        view.append(&chip(&format!("🔥 Beste Serie: {}", self.engine.max_streak())));
        let difficulty = self.engine.difficulty();
        view.append(&finish_buttons(
            page,
            move |page| Self::dispatch(page, MathCommand::Start(difficulty)),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Math) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, MathCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<MathPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        {
            let mut page = self.borrow_mut();
            let visual_mode = page.ctx.settings.borrow().math_visual_mode;
            page.engine.set_visual_mode(visual_mode);
        }
        MathPage::render(self);
    }

    fn leave(&self) {
        MathPage::back_to_menu(self);
    }
}
