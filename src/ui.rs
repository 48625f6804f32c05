use crate::config::{ensure_config_files, theme_css, Settings, SettingsStore, Shortcut, Theme};
use crate::controller::{
    setup_drop_target, setup_header_actions, setup_resize_handle, setup_search_logic,
    setup_title_editing, setup_window_events,
};
use crate::error::Result;
use crate::modules::app_launcher::{create_icon_grid, update_icon_grid};
use crate::modules::header_bar::create_header_bar;
use crate::search::filter_shortcuts;
use crate::utils::{clamp_width, search_visible, window_height, HEADER_HEIGHT, RESIZE_MARGIN};
use crate::wm;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box, Button, CssProvider, Entry, Grid, Label,
    Orientation, Stack,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
pub const APP_TITLE: &str = "shortcut-launcher";
const EMPTY_HINT: &str = "Drag files here or use the + button to add new icons.";
const NO_MATCH_HINT: &str = "No shortcuts match your search.";
pub struct LauncherState {
    pub settings: Settings,
    pub store: SettingsStore,
    pub query: String,
}
impl LauncherState {
    pub fn new(settings: Settings, store: SettingsStore) -> Self {
        Self { settings, store, query: String::new() }
    }
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.settings)
    }
}
pub type SharedState = Rc<RefCell<LauncherState>>;
#[derive(Clone)]
pub struct LauncherWidgets {
    pub window: ApplicationWindow,
    pub root: Box,
    pub title_stack: Stack,
    pub title_label: Label,
    pub title_entry: Entry,
    pub theme_button: Button,
    pub add_button: Button,
    pub close_button: Button,
    pub search_entry: Entry,
    pub empty_label: Label,
    pub grid: Grid,
    pub resize_handle: Box,
    pub css: CssProvider,
}
pub fn build_ui(app: &Application) {
    if let Some(existing) = app.active_window() {
        existing.present();
        return;
    }
    ensure_config_files();
    let store = SettingsStore::default_location();
    let settings = store.load_or_default();
    info!(path = %store.path().display(), apps = settings.apps.len(), "starting launcher");
    let window = ApplicationWindow::builder()
        .application(app)
        .title(APP_TITLE)
        .decorated(false)
        .build();
    window.add_css_class("launcher-window");
    let root = Box::builder().orientation(Orientation::Horizontal).build();
    root.add_css_class("main-container");
    let content = Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(10)
        .hexpand(true)
        .vexpand(true)
        .build();
    root.append(&content);
    let header = create_header_bar(&settings.window_title);
    content.append(&header.handle);
    let search_entry = Entry::builder()
        .placeholder_text("Search...")
        .hexpand(true)
        .build();
    search_entry.add_css_class("search-entry");
    content.append(&search_entry);
    let empty_label = Label::builder()
        .label(EMPTY_HINT)
        .halign(Align::Center)
        .valign(Align::Center)
        .vexpand(true)
        .visible(false)
        .build();
    empty_label.add_css_class("empty-label");
    content.append(&empty_label);
    let (scrolled, grid) = create_icon_grid();
    content.append(&scrolled);
    let resize_handle = Box::builder()
        .width_request(RESIZE_MARGIN)
        .margin_top(HEADER_HEIGHT)
        .vexpand(true)
        .build();
    resize_handle.add_css_class("resize-handle");
    resize_handle.set_cursor_from_name(Some("ew-resize"));
    root.append(&resize_handle);
    window.set_child(Some(&root));
    let css = CssProvider::new();
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &css,
            gtk4::STYLE_PROVIDER_PRIORITY_USER,
        );
    }
    let widgets = LauncherWidgets {
        window: window.clone(),
        root,
        title_stack: header.title_stack,
        title_label: header.title_label,
        title_entry: header.title_entry,
        theme_button: header.theme_button,
        add_button: header.add_button,
        close_button: header.close_button,
        search_entry,
        empty_label,
        grid,
        resize_handle,
        css,
    };
    let theme = settings.theme;
    let state: SharedState = Rc::new(RefCell::new(LauncherState::new(settings, store)));
    apply_theme(&widgets, theme);
    render(&widgets, &state, false);
    setup_search_logic(&widgets, &state);
    setup_header_actions(&widgets, &state);
    setup_title_editing(&widgets, &state);
    setup_resize_handle(&widgets, &state);
    setup_drop_target(&widgets, &state);
    setup_window_events(&widgets, &state);
    window.present();
    let manager = wm::detect();
    info!(wm = manager.name(), "requesting keep-above");
    glib::timeout_add_local(std::time::Duration::from_millis(400), move || {
        manager.keep_above(APP_TITLE);
        glib::ControlFlow::Break
    });
}
/// Rebuilds the grid from the current query and syncs every dependent widget.
pub fn render(widgets: &LauncherWidgets, state: &SharedState, filtering: bool) {
    let (entries, total): (Vec<(usize, Shortcut)>, usize) = {
        let s = state.borrow();
        let hits = filter_shortcuts(&s.settings.apps, &s.query)
            .into_iter()
            .map(|(i, app)| (i, app.clone()))
            .collect();
        (hits, s.settings.apps.len())
    };
    update_icon_grid(&widgets.grid, &entries, widgets, state);
    widgets.empty_label.set_label(if total == 0 { EMPTY_HINT } else { NO_MATCH_HINT });
    widgets.empty_label.set_visible(entries.is_empty());
    widgets.grid.set_visible(!entries.is_empty());
    widgets.search_entry.set_visible(search_visible(entries.len(), filtering));
    apply_window_size(widgets, &state.borrow());
}
pub fn refresh(widgets: &LauncherWidgets, state: &SharedState) {
    let filtering = !state.borrow().query.is_empty();
    render(widgets, state, filtering);
}
pub fn apply_window_size(widgets: &LauncherWidgets, state: &LauncherState) {
    let width = clamp_width(state.settings.window_width);
    let height = window_height(state.settings.apps.len());
    widgets.root.set_size_request(width, height);
    widgets.window.set_default_size(width, height);
}
pub fn apply_theme(widgets: &LauncherWidgets, theme: Theme) {
    for class in [Theme::Light.css_class(), Theme::Dark.css_class()] {
        widgets.window.remove_css_class(class);
    }
    widgets.window.add_css_class(theme.css_class());
    widgets.css.load_from_data(&theme_css(theme));
}
