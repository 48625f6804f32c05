use crate::config::Shortcut;
use crate::controller::{launch_shortcut, open_edit_dialog, remove_and_refresh};
use crate::ui::{LauncherWidgets, SharedState};
use crate::utils::{
    bounce_offset, grid_position, BOUNCE_DURATION_MS, BOUNCE_HEIGHT, GRID_SPACING, ICON_IMAGE_SIZE,
    ICON_SIZE,
};
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Grid, Image, Label, Orientation, Popover, ScrolledWindow};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;
const DEFAULT_ICON: &str = "application-x-executable";
pub fn create_icon_grid() -> (ScrolledWindow, Grid) {
    let scrolled = ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vscrollbar_policy(gtk4::PolicyType::Automatic)
        .hexpand(true)
        .vexpand(true)
        .build();
    scrolled.add_css_class("scrolled-window");
    // Row spacing comes from each icon's top margin, which the bounce animation borrows.
    let grid = Grid::builder()
        .halign(Align::Center)
        .valign(Align::Start)
        .build();
    grid.set_column_spacing(GRID_SPACING as u32);
    grid.set_row_spacing(0);
    grid.add_css_class("icon-grid");
    scrolled.set_child(Some(&grid));
    (scrolled, grid)
}
pub fn update_icon_grid(
    grid: &Grid,
    entries: &[(usize, Shortcut)],
    widgets: &LauncherWidgets,
    state: &SharedState,
) {
    while let Some(child) = grid.first_child() {
        grid.remove(&child);
    }
    for (slot, (index, app)) in entries.iter().enumerate() {
        let icon = create_app_icon(*index, app, widgets, state);
        let (col, row) = grid_position(slot);
        grid.attach(&icon, col, row, 1, 1);
    }
}
fn create_app_icon(index: usize, app: &Shortcut, widgets: &LauncherWidgets, state: &SharedState) -> Button {
    let content = Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(4)
        .halign(Align::Center)
        .valign(Align::Center)
        .build();
    content.append(&load_icon_image(app.icon.as_deref()));
    let name = Label::builder()
        .label(&app.name)
        .ellipsize(gtk4::pango::EllipsizeMode::End)
        .max_width_chars(12)
        .build();
    name.add_css_class("app-icon-name");
    content.append(&name);
    let button = Button::builder()
        .child(&content)
        .has_frame(false)
        .tooltip_text(&app.name)
        .width_request(ICON_SIZE)
        .height_request(ICON_SIZE)
        .margin_top(BOUNCE_HEIGHT)
        .build();
    button.add_css_class("app-icon");
    button.set_cursor_from_name(Some("pointer"));
    let (w, st) = (widgets.clone(), state.clone());
    button.connect_clicked(move |b| {
        launch_shortcut(&w, &st, index);
        animate_bounce(b.upcast_ref());
    });
    let menu_click = gtk4::GestureClick::new();
    menu_click.set_button(gtk4::gdk::BUTTON_SECONDARY);
    let (w, st, btn) = (widgets.clone(), state.clone(), button.downgrade());
    menu_click.connect_pressed(move |_, _, x, y| {
        if let Some(btn) = btn.upgrade() {
            show_icon_menu(&btn, index, x, y, &w, &st);
        }
    });
    button.add_controller(menu_click);
    button
}
fn load_icon_image(icon: Option<&str>) -> Image {
    let texture = icon
        .filter(|p| Path::new(p).is_file())
        .and_then(|p| match gtk4::gdk::Texture::from_filename(p) {
            Ok(t) => Some(t),
            Err(e) => {
                debug!(path = p, error = %e, "falling back to default icon");
                None
            }
        });
    let image = match texture {
        Some(t) => Image::from_paintable(Some(&t)),
        None => Image::from_icon_name(DEFAULT_ICON),
    };
    image.set_pixel_size(ICON_IMAGE_SIZE);
    image.add_css_class("app-icon-img");
    image
}
fn show_icon_menu(
    anchor: &Button,
    index: usize,
    x: f64,
    y: f64,
    widgets: &LauncherWidgets,
    state: &SharedState,
) {
    let list = Box::builder().orientation(Orientation::Vertical).build();
    let popover = Popover::builder().child(&list).has_arrow(false).build();
    popover.add_css_class("app-icon-menu");
    popover.set_parent(anchor);
    popover.set_pointing_to(Some(&gtk4::gdk::Rectangle::new(x as i32, y as i32, 1, 1)));
    let entries: [(&str, fn(&LauncherWidgets, &SharedState, usize)); 3] = [
        ("Open", launch_shortcut),
        ("Edit", open_edit_dialog),
        ("Remove", remove_and_refresh),
    ];
    for (label, action) in entries {
        let item = Button::builder().label(label).has_frame(false).build();
        let (w, st, pop) = (widgets.clone(), state.clone(), popover.downgrade());
        item.connect_clicked(move |_| {
            if let Some(pop) = pop.upgrade() {
                pop.popdown();
            }
            let (w, st) = (w.clone(), st.clone());
            // The grid may be rebuilt by the action, so let the popover finish first.
            glib::idle_add_local_once(move || action(&w, &st, index));
        });
        list.append(&item);
    }
    popover.connect_closed(|p| {
        let p = p.clone();
        glib::idle_add_local_once(move || p.unparent());
    });
    popover.popup();
}
fn animate_bounce(widget: &gtk4::Widget) {
    let (w, start) = (widget.clone(), Instant::now());
    glib::timeout_add_local(Duration::from_millis(16), move || {
        let t = (start.elapsed().as_millis() as f64 / BOUNCE_DURATION_MS).min(1.0);
        let lift = bounce_offset(t).round() as i32;
        w.set_margin_top(BOUNCE_HEIGHT - lift);
        w.set_margin_bottom(lift);
        if t >= 1.0 {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
}
