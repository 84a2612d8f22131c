use super::helpers::{
    after, big_button, body, chip, clear_box, emoji, finish_buttons, hbox, heading, on_click,
    outline_button, rating_view, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::reading::GRADES;
use crate::events::EventHandler;
use crate::game::profile::{address_player, cheer_player};
use crate::game::reading::{self, ReadingCommand, ReadingGame, FEEDBACK_DELAY};
use crate::model::{GameId, GamePhase};
use gtk4::prelude::*;
use gtk4::{Button, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

pub struct ReadingPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: ReadingGame,
    timers: TimerSet,
}

impl ReadingPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = ReadingGame::new(ctx.game_events.clone(), ctx.seed);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: ReadingCommand) {
        let started_feedback = {
            let mut this = page.borrow_mut();
            let before = this.engine.selected_answer().is_some();
            this.engine.handle_event(&command);
            !before && this.engine.selected_answer().is_some()
        };
        if started_feedback {
            let this = page.borrow();
            after(&this.timers, FEEDBACK_DELAY, page, |page| {
                Self::dispatch(page, ReadingCommand::Continue)
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
        view.append(&emoji("📖", "xx-large"));
        view.append(&heading(GameId::Reading.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Wähle deine Klassenstufe!",
        )));

        let grades = hbox(12);
        for grade in GRADES.iter() {
            let content = vbox(4);
            content.append(&emoji(grade.emoji, "x-large"));
            content.append(&subheading(grade.name));
            content.append(&body(grade.description));
            let button = Button::builder().child(&content).css_classes(["card"]).build();
            let id = grade.id;
            on_click(&button, page, move |page| {
                Self::dispatch(page, ReadingCommand::Start(id))
            });
            grades.append(&button);
        }
        view.append(&grades);

        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Reading) {
            view.append(&panel);
        }
        view
    }

    fn playing_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let (Some(story), Some(question)) = (self.engine.story(), self.engine.question()) else {
            return view;
        };

        view.append(&heading(&format!("📖 {}", story.title)));
        let text = body(story.text);
        text.add_css_class("card");
        text.set_margin_start(24);
        text.set_margin_end(24);
        view.append(&text);

        view.append(&chip(&format!(
            "Frage {} von {}",
            self.engine.question_index() + 1,
            self.engine.total_questions()
        )));
        view.append(&subheading(question.question));

        let answers = gtk4::Box::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .build();
        let selected = self.engine.selected_answer();
        for (index, answer) in question.answers.iter().enumerate() {
            let button = big_button(answer);
            if let Some(selected) = selected {
                button.set_sensitive(false);
                if index == question.correct {
                    button.add_css_class("success");
                } else if index == selected {
                    button.add_css_class("destructive-action");
                }
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, ReadingCommand::Answer(index))
            });
            answers.append(&button);
        }
        view.append(&answers);

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let score = self.engine.score();
        let total = self.engine.total_questions();
        let name = self.ctx.player_name();
        let view = rating_view(
            &reading::rating(score, total),
            &cheer_player(name.as_ref(), "Super gelesen"),
            &format!("{} von {} richtig", score, total),
        );
        let grade = self.engine.grade();
        view.append(&finish_buttons(
            page,
            move |page| Self::dispatch(page, ReadingCommand::Start(grade)),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Reading) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, ReadingCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<ReadingPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        ReadingPage::render(self);
    }

    fn leave(&self) {
        ReadingPage::back_to_menu(self);
    }
}
