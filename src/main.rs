use enissa::model::Route;
use enissa::ui;
use gtk4::prelude::*;
use gtk4::Application;

const APP_ID: &str = "org.enissa.Enissa";

fn init_logging() {
    env_logger::init();
}

fn main() -> glib::ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let start = Route::from_args(&args);

    // Create a new application
    let app = Application::builder().application_id(APP_ID).build();

    // Connect to "activate" signal
    app.connect_activate(move |app| ui::window::build_ui(app, start));

    // GTK would reject the route argument, so only the program name is passed on
    app.run_with_args(&args[..args.len().min(1)])
}
