mod config;
mod controller;
mod error;
mod modules;
mod search;
mod ui;
mod utils;
mod wm;
use gtk4::prelude::*;
use gtk4::Application;
use tracing_subscriber::EnvFilter;
fn main() -> glib::ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shortcut_launcher=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let app = Application::builder()
        .application_id("org.shortcut.launcher")
        .build();
    app.connect_activate(ui::build_ui);
    app.run()
}
