use super::helpers::{
    after, big_button, body, chip, clear_box, emoji, finish_buttons, hbox, heading, on_click,
    outline_button, rating_view, subheading, vbox,
};
use super::page::{Page, PageContext};
use super::stats_panel::stats_panel;
use super::timers::TimerSet;
use crate::content::animals::{Animal, ANIMALS, CONTINENTS};
use crate::events::EventHandler;
use crate::game::animals::{self, AnimalCommand, AnimalGame, FEEDBACK_DELAY};
use crate::game::profile::{address_player, cheer_player};
use crate::model::{GameId, GamePhase};
use gtk4::prelude::*;
use gtk4::{Button, FlowBox, SelectionMode};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AnimalsPage {
    root: gtk4::Box,
    ctx: PageContext,
    engine: AnimalGame,
    timers: TimerSet,
}

fn animal_index(animal: &Animal) -> Option<usize> {
    ANIMALS.iter().position(|candidate| candidate == animal)
}

fn flow_box() -> FlowBox {
    FlowBox::builder()
        .selection_mode(SelectionMode::None)
        .homogeneous(true)
        .max_children_per_line(4)
        .column_spacing(12)
        .row_spacing(12)
        .build()
}

impl AnimalsPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = AnimalGame::new(ctx.game_events.clone(), ctx.seed);
        let page = Rc::new(RefCell::new(Self {
            root: vbox(16),
            ctx,
            engine,
            timers: TimerSet::default(),
        }));
        Self::render(&page);
        page
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: AnimalCommand) {
        let started_feedback = {
            let mut this = page.borrow_mut();
            let before = this.engine.is_showing_feedback();
            this.engine.handle_event(&command);
            !before && this.engine.is_showing_feedback()
        };
        if started_feedback {
            let this = page.borrow();
            after(&this.timers, FEEDBACK_DELAY, page, |page| {
                Self::dispatch(page, AnimalCommand::Continue)
            });
        }
        Self::render(page);
    }

    fn render(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        clear_box(&this.root);
        let content = match this.engine.phase() {
            GamePhase::Playing => this.quiz_view(page),
            GamePhase::Finished => this.finished_view(page),
            GamePhase::Explore => this.explore_view(page),
            GamePhase::Learning => this.learning_view(page),
            _ => this.menu_view(page),
        };
        this.root.append(&content);
    }

    fn menu_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&emoji("🌍", "xx-large"));
        view.append(&heading(GameId::Animals.title()));
        let name = self.ctx.player_name();
        view.append(&subheading(&address_player(
            name.as_ref(),
            "Lerne Tiere und ihre Herkunft kennen!",
        )));

        let modes = hbox(12);
        let quiz = big_button("🎯 Quiz spielen");
        on_click(&quiz, page, |page| Self::dispatch(page, AnimalCommand::StartQuiz));
        modes.append(&quiz);
        let explore = outline_button("🗺️ Tiere entdecken");
        on_click(&explore, page, |page| Self::dispatch(page, AnimalCommand::Explore));
        modes.append(&explore);
        view.append(&modes);

        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Animals) {
            view.append(&panel);
        }
        view
    }

    fn continent_buttons(
        &self,
        page: &Rc<RefCell<Self>>,
        command: fn(usize) -> AnimalCommand,
        enabled: bool,
    ) -> FlowBox {
        let continents = flow_box();
        for (index, continent) in CONTINENTS.iter().enumerate() {
            let button = big_button(&format!("{} {}", continent.emoji, continent.name));
            button.set_sensitive(enabled);
            on_click(&button, page, move |page| Self::dispatch(page, command(index)));
            continents.insert(&button, -1);
        }
        continents
    }

    fn quiz_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        let Some(animal) = self.engine.animal() else {
            return view;
        };
        view.append(&chip(&format!("⭐ Punkte: {}", self.engine.score())));
        view.append(&emoji(animal.emoji, "xx-large"));
        view.append(&heading(animal.name));
        view.append(&subheading("Von welchem Kontinent komme ich?"));
        view.append(&self.continent_buttons(
            page,
            AnimalCommand::Guess,
            !self.engine.is_showing_feedback(),
        ));

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn explore_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        view.append(&heading("🗺️ Tiere entdecken"));
        view.append(&self.continent_buttons(page, AnimalCommand::SelectContinent, true));

        if let Some(continent) = self.engine.selected_continent() {
            view.append(&subheading(&format!(
                "{} Tiere aus {}",
                continent.emoji, continent.name
            )));
            let animals = flow_box();
            for animal in self.engine.continent_animals() {
                let Some(index) = animal_index(animal) else {
                    continue;
                };
                let content = vbox(4);
                content.append(&emoji(animal.emoji, "xx-large"));
                content.append(&body(animal.name));
                let button = Button::builder().child(&content).css_classes(["card"]).build();
                on_click(&button, page, move |page| {
                    Self::dispatch(page, AnimalCommand::LearnAnimal(index))
                });
                animals.insert(&button, -1);
            }
            view.append(&animals);
        }

        let back = outline_button("📋 Zurück zum Menü");
        on_click(&back, page, |page| Self::back_to_menu(page));
        view.append(&back);
        view
    }

    fn learning_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let view = vbox(16);
        if let Some(animal) = self.engine.animal() {
            let card = vbox(8);
            card.add_css_class("card");
            card.append(&emoji(animal.emoji, "xx-large"));
            card.append(&heading(animal.name));
            card.append(&body(&format!("🌍 Kontinent: {}", animal.continent)));
            card.append(&body(&format!("🏡 Lebensraum: {}", animal.habitat)));
            card.append(&body(&format!("💡 {}", animal.fact)));
            view.append(&card);
        }
        let back = outline_button("⬅️ Zurück");
        on_click(&back, page, |page| {
            Self::dispatch(page, AnimalCommand::BackToExplore)
        });
        view.append(&back);
        view
    }

    fn finished_view(&self, page: &Rc<RefCell<Self>>) -> gtk4::Box {
        let score = self.engine.score();
        let name = self.ctx.player_name();
        let view = rating_view(
            &animals::rating(score),
            &cheer_player(name.as_ref(), "Gut gemacht"),
            &format!("{} Tiere richtig erkannt", score),
        );
        view.append(&finish_buttons(
            page,
            |page| Self::dispatch(page, AnimalCommand::StartQuiz),
            |page| Self::back_to_menu(page),
        ));
        if let Some(panel) = stats_panel(&self.ctx.stats.borrow(), GameId::Animals) {
            view.append(&panel);
        }
        view
    }

    fn back_to_menu(page: &Rc<RefCell<Self>>) {
        page.borrow().timers.clear();
        Self::dispatch(page, AnimalCommand::BackToMenu);
    }
}

impl Page for Rc<RefCell<AnimalsPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        AnimalsPage::render(self);
    }

    fn leave(&self) {
        AnimalsPage::back_to_menu(self);
    }
}
