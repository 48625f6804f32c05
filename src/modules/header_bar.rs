use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Label, Orientation, Stack, WindowHandle};
use crate::utils::HEADER_HEIGHT;
pub struct HeaderBar {
    pub handle: WindowHandle,
    pub title_stack: Stack,
    pub title_label: Label,
    pub title_entry: Entry,
    pub theme_button: Button,
    pub add_button: Button,
    pub close_button: Button,
}
/// Title on the left, action buttons on the right. Dragging anywhere on the
/// bar moves the frameless window.
pub fn create_header_bar(title: &str) -> HeaderBar {
    let bar = Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(10)
        .height_request(HEADER_HEIGHT / 2)
        .build();
    let title_label = Label::builder()
        .label(title)
        .halign(Align::Start)
        .valign(Align::Center)
        .tooltip_text("Right-click to edit title")
        .build();
    title_label.add_css_class("launcher-title");
    let title_entry = Entry::builder().has_frame(false).build();
    title_entry.add_css_class("title-entry");
    let title_stack = Stack::builder().hhomogeneous(false).halign(Align::Start).build();
    title_stack.add_named(&title_label, Some("label"));
    title_stack.add_named(&title_entry, Some("entry"));
    title_stack.set_visible_child_name("label");
    bar.append(&title_stack);
    let spacer = Box::builder().hexpand(true).build();
    bar.append(&spacer);
    let theme_button = header_button("display-brightness-symbolic", "Toggle theme");
    let add_button = header_button("list-add-symbolic", "Add application");
    let close_button = header_button("window-close-symbolic", "Close");
    for btn in [&theme_button, &add_button, &close_button] {
        bar.append(btn);
    }
    let handle = WindowHandle::builder().child(&bar).build();
    HeaderBar {
        handle,
        title_stack,
        title_label,
        title_entry,
        theme_button,
        add_button,
        close_button,
    }
}
fn header_button(icon: &str, tooltip: &str) -> Button {
    let btn = Button::builder()
        .icon_name(icon)
        .has_frame(false)
        .tooltip_text(tooltip)
        .valign(Align::Center)
        .build();
    btn.add_css_class("header-btn");
    btn.set_cursor_from_name(Some("pointer"));
    btn
}
