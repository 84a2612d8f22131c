use super::about_page::AboutPage;
use super::animals_page::AnimalsPage;
use super::christmas_page::ChristmasPage;
use super::drawing_page::DrawingPage;
use super::focus_page::FocusPage;
use super::home_page::HomePage;
use super::math_page::MathPage;
use super::memory_page::MemoryPage;
use super::page::{Page, PageContext};
use super::profile_dialog::ProfileDialog;
use super::puzzle_page::PuzzlePage;
use super::reading_page::ReadingPage;
use super::sequence_page::SequencePage;
use super::settings_menu::SettingsMenuUI;
use super::toast::ToastUI;
use super::tooth_brushing_page::ToothBrushingPage;
use crate::content::home::APP_TITLE;
use crate::destroyable::Destroyable;
use crate::events::Channel;
use crate::game::profile::PlayerProfile;
use crate::game::settings::Settings;
use crate::game::stats_manager::StatsManager;
use crate::game::stats_recorder::StatsRecorder;
use crate::model::{GameEvent, GameId, GlobalEvent, Notification, Route};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use gio::SimpleAction;
use gtk4::{
    prelude::*, Application, ApplicationWindow, Button, CssProvider, HeaderBar, Label,
    MenuButton, Overlay, ScrolledWindow, Stack, StackTransitionType,
    STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use log::{error, info, trace};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const APP_ID_ICON: &str = "org.enissa.Enissa";

const STYLE: &str = "
.toast { padding: 12px 18px; border-radius: 18px; }
button.success { background: alpha(@success_color, 0.35); }
button.card { padding: 12px; }
";

fn open_store() -> Rc<dyn KeyValueStore> {
    match FileStore::default_location() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            error!(target: "window", "Falling back to in-memory storage: {}", err);
            Rc::new(MemoryStore::new())
        }
    }
}

fn load_css() {
    let Some(display) = gtk4::gdk::Display::default() else {
        error!(target: "window", "No display to style");
        return;
    };
    let provider = CssProvider::new();
    provider.load_from_string(STYLE);
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_pages(ctx: &PageContext) -> HashMap<Route, Box<dyn Page>> {
    let mut pages: HashMap<Route, Box<dyn Page>> = HashMap::new();
    pages.insert(Route::Home, Box::new(HomePage::new(ctx.clone())));
    pages.insert(Route::About, Box::new(AboutPage::new()));
    for game in GameId::all() {
        let page: Box<dyn Page> = match game {
            GameId::Math => Box::new(MathPage::new(ctx.clone())),
            GameId::Draw => Box::new(DrawingPage::new(ctx.clone())),
            GameId::Memory => Box::new(MemoryPage::new(ctx.clone())),
            GameId::Sequence => Box::new(SequencePage::new(ctx.clone())),
            GameId::Focus => Box::new(FocusPage::new(ctx.clone())),
            GameId::Puzzle => Box::new(PuzzlePage::new(ctx.clone())),
            GameId::Reading => Box::new(ReadingPage::new(ctx.clone())),
            GameId::Christmas => Box::new(ChristmasPage::new(ctx.clone())),
            GameId::ToothBrushing => Box::new(ToothBrushingPage::new(ctx.clone())),
            GameId::Animals => Box::new(AnimalsPage::new(ctx.clone())),
        };
        pages.insert(Route::Game(game), page);
    }
    pages
}

fn name_button_label(profile: &PlayerProfile) -> String {
    format!("👤 {}", profile.display_name())
}

pub fn build_ui(app: &Application, start: Route) {
    let (game_event_emitter, game_event_observer) = Channel::<GameEvent>::new();
    let (global_event_emitter, global_event_observer) = Channel::<GlobalEvent>::new();

    let store = open_store();
    let settings = Rc::new(RefCell::new(Settings::load(store.as_ref())));
    let profile = Rc::new(RefCell::new(PlayerProfile::load(store.clone())));
    let stats = Rc::new(RefCell::new(StatsManager::new(store.clone())));
    let seed = Settings::seed_from_env();
    if Settings::is_debug_mode() {
        info!(target: "window", "Debug mode; seed {:?}", seed);
    }

    let recorder = Rc::new(RefCell::new(StatsRecorder::new(
        stats.clone(),
        game_event_observer.clone(),
        global_event_emitter.clone(),
    )));

    let ctx = PageContext {
        game_events: game_event_emitter.clone(),
        global_events: global_event_emitter.clone(),
        profile: profile.clone(),
        stats,
        settings: settings.clone(),
        seed,
    };

    load_css();

    let window = ApplicationWindow::builder()
        .application(app)
        .title(APP_TITLE)
        .icon_name(APP_ID_ICON)
        .resizable(true)
        .default_width(1024)
        .default_height(768)
        .build();

    let stack = Stack::builder()
        .transition_type(StackTransitionType::Crossfade)
        .vhomogeneous(false)
        .build();
    let pages = Rc::new(build_pages(&ctx));
    for route in Route::all() {
        if let Some(page) = pages.get(&route) {
            stack.add_named(&page.widget(), Some(&route.path()));
        }
    }
    stack.set_visible_child_name(&Route::Home.path());
    let current_route = Rc::new(Cell::new(Route::Home));

    let scrolled_window = ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&stack)
        .build();

    let toast = ToastUI::new(game_event_observer.clone(), settings.clone());
    let overlay = Overlay::builder().child(&scrolled_window).build();
    overlay.add_overlay(&toast.borrow().revealer);
    window.set_child(Some(&overlay));

    // header
    let header_bar = HeaderBar::new();
    let title = Label::builder().label(APP_TITLE).css_classes(["title"]).build();
    header_bar.set_title_widget(Some(&title));

    let back_button = Button::builder().label("🏠 Zurück").visible(false).build();
    let emitter = global_event_emitter.clone();
    back_button.connect_clicked(move |_| emitter.emit(GlobalEvent::Navigate(Route::Home)));
    header_bar.pack_start(&back_button);

    let settings_menu = SettingsMenuUI::new(
        &window,
        global_event_emitter.clone(),
        settings.clone(),
        store.clone(),
    );
    let menu = gio::Menu::new();
    menu.append_section(Some("Einstellungen"), settings_menu.menu());
    menu.append(Some("🗑️ Statistik zurücksetzen"), Some("win.reset-stats"));
    menu.append(Some("ℹ️ Über ENISSA"), Some("win.about"));
    let menu_button = MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu)
        .build();
    header_bar.pack_end(&menu_button);

    let name_button = Button::with_label(&name_button_label(&profile.borrow()));
    name_button.set_tooltip_text(Some("Name ändern"));
    let profile_dialog = Rc::new(ProfileDialog::new(
        &window,
        profile.clone(),
        game_event_emitter.clone(),
        global_event_emitter.clone(),
    ));
    let dialog = profile_dialog.clone();
    name_button.connect_clicked(move |_| dialog.show());
    header_bar.pack_end(&name_button);
    window.set_titlebar(Some(&header_bar));

    let action_about = SimpleAction::new("about", None);
    let emitter = global_event_emitter.clone();
    action_about.connect_activate(move |_, _| emitter.emit(GlobalEvent::Navigate(Route::About)));
    window.add_action(&action_about);

    let subscription = {
        let pages = pages.clone();
        let current_route = current_route.clone();
        let stack = stack.clone();
        let back_button = back_button.clone();
        let name_button = name_button.clone();
        let profile = profile.clone();
        global_event_observer.subscribe(move |event| match event {
            GlobalEvent::Navigate(route) => {
                let previous = current_route.get();
                if previous == *route {
                    return;
                }
                info!(target: "window", "Navigating to {}", route.path());
                if let Some(page) = pages.get(&previous) {
                    page.leave();
                }
                current_route.set(*route);
                stack.set_visible_child_name(&route.path());
                back_button.set_visible(*route != Route::Home);
                if let Some(page) = pages.get(route) {
                    page.enter();
                }
            }
            GlobalEvent::PlayerNameChanged(_) => {
                name_button.set_label(&name_button_label(&profile.borrow()));
                if let Some(page) = pages.get(&current_route.get()) {
                    page.enter();
                }
            }
            GlobalEvent::SettingsChanged(settings) => {
                trace!(target: "window", "Settings changed: {:?}", settings);
                if current_route.get() == Route::Game(GameId::Math) {
                    if let Some(page) = pages.get(&current_route.get()) {
                        page.enter();
                    }
                }
            }
            GlobalEvent::StatsChanged(game) => {
                trace!(target: "window", "Stats changed for {}", game);
            }
        })
    };

    let action_reset_stats = SimpleAction::new("reset-stats", None);
    {
        let stats = ctx.stats.clone();
        let pages = pages.clone();
        let current_route = current_route.clone();
        let game_events = game_event_emitter.clone();
        action_reset_stats.connect_activate(move |_, _| {
            if let Err(err) = stats.borrow_mut().reset_all() {
                error!(target: "window", "Failed to reset statistics: {}", err);
                return;
            }
            game_events.emit(GameEvent::Notify(Notification::info("Statistik gelöscht! 🗑️")));
            if let Some(page) = pages.get(&current_route.get()) {
                page.enter();
            }
        });
    }
    window.add_action(&action_reset_stats);

    let settings_menu = RefCell::new(settings_menu);
    let subscription = RefCell::new(Some(subscription));
    window.connect_close_request(move |_| {
        if let Some(page) = pages.get(&current_route.get()) {
            page.leave();
        }
        recorder.borrow_mut().destroy();
        toast.borrow_mut().destroy();
        settings_menu.borrow_mut().destroy();
        if let Some(subscription) = subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
        glib::Propagation::Proceed
    });

    global_event_emitter.emit(GlobalEvent::Navigate(start));
    window.present();

    if profile.borrow().needs_name() {
        profile_dialog.show();
    }
}
