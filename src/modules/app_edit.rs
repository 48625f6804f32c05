use crate::config::{Shortcut, Theme};
use crate::error::{LauncherError, Result};
use crate::utils::show_alert;
use gtk4::prelude::*;
use gtk4::{Align, ApplicationWindow, Box, Button, Entry, Grid, Label, Orientation, Window};
use tracing::{debug, warn};
const ICON_PATTERNS: [&str; 5] = ["*.png", "*.jpg", "*.bmp", "*.ico", "*.svg"];
/// Opens the modal add/edit form. `on_accept` decides whether the entry is
/// kept: an `IncompleteInput` rejection leaves the form open for correction.
/// Returns the dialog so callers can follow its lifetime.
pub fn open_shortcut_dialog(
    parent: &ApplicationWindow,
    title: &str,
    theme: Theme,
    prefill: Option<&Shortcut>,
    on_accept: impl Fn(Shortcut) -> Result<()> + 'static,
) -> Window {
    let dialog = Window::builder()
        .title(title)
        .transient_for(parent)
        .modal(true)
        .default_width(400)
        .default_height(250)
        .resizable(false)
        .build();
    dialog.add_css_class("edit-dialog");
    dialog.add_css_class(theme.css_class());
    let form = Grid::builder()
        .column_spacing(10)
        .row_spacing(10)
        .margin_top(15)
        .margin_bottom(15)
        .margin_start(15)
        .margin_end(15)
        .build();
    let name_entry = Entry::builder().hexpand(true).build();
    let command_entry = Entry::builder().hexpand(true).build();
    let icon_entry = Entry::builder().hexpand(true).build();
    if let Some(p) = prefill {
        name_entry.set_text(&p.name);
        command_entry.set_text(&p.command);
        icon_entry.set_text(p.icon.as_deref().unwrap_or_default());
    }
    let icon_row = Box::builder().orientation(Orientation::Horizontal).spacing(6).build();
    icon_row.append(&icon_entry);
    let browse = Button::with_label("Select Icon");
    icon_row.append(&browse);
    for (row, (caption, field)) in [
        ("Application Name:", name_entry.upcast_ref::<gtk4::Widget>()),
        ("Command:", command_entry.upcast_ref()),
        ("Icon Path:", icon_row.upcast_ref()),
    ]
    .into_iter()
    .enumerate()
    {
        let label = Label::builder().label(caption).halign(Align::End).build();
        form.attach(&label, 0, row as i32, 1, 1);
        form.attach(field, 1, row as i32, 1, 1);
    }
    let buttons = Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(8)
        .halign(Align::End)
        .valign(Align::End)
        .vexpand(true)
        .build();
    let ok = Button::with_label("OK");
    let cancel = Button::with_label("Cancel");
    buttons.append(&ok);
    buttons.append(&cancel);
    form.attach(&buttons, 0, 3, 2, 1);
    dialog.set_child(Some(&form));
    let (dlg, entry) = (dialog.clone(), icon_entry.clone());
    browse.connect_clicked(move |_| pick_icon(&dlg, &entry));
    let dlg = dialog.clone();
    cancel.connect_clicked(move |_| dlg.close());
    let (dlg, parent) = (dialog.clone(), parent.clone());
    ok.connect_clicked(move |_| {
        let shortcut = Shortcut::new(
            name_entry.text().trim(),
            command_entry.text().trim(),
            Some(icon_entry.text().trim().to_string()),
        );
        match on_accept(shortcut) {
            Ok(()) => dlg.close(),
            Err(e @ LauncherError::IncompleteInput) => show_alert(&dlg, e.heading(), &e.to_string()),
            Err(e) => {
                warn!(error = %e, "shortcut dialog action failed");
                dlg.close();
                show_alert(&parent, e.heading(), &e.to_string());
            }
        }
    });
    dialog.present();
    dialog
}
fn pick_icon(dialog: &Window, target: &Entry) {
    let filter = gtk4::FileFilter::new();
    filter.set_name(Some("Image Files"));
    for pattern in ICON_PATTERNS {
        filter.add_pattern(pattern);
    }
    let filters = gio::ListStore::new::<gtk4::FileFilter>();
    filters.append(&filter);
    let chooser = gtk4::FileDialog::builder()
        .title("Select Icon")
        .modal(true)
        .filters(&filters)
        .default_filter(&filter)
        .build();
    let target = target.clone();
    chooser.open(Some(dialog), gio::Cancellable::NONE, move |res| match res {
        Ok(file) => {
            if let Some(path) = file.path() {
                target.set_text(&path.to_string_lossy());
            }
        }
        Err(e) => debug!(error = %e, "icon selection dismissed"),
    });
}
