use crate::config::{Shortcut, Theme};
use crate::error::{LauncherError, Result};
use crate::modules::app_edit::open_shortcut_dialog;
use crate::ui::{apply_theme, apply_window_size, refresh, render, LauncherState, LauncherWidgets, SharedState};
use crate::utils::{clamp_width, resized_width, show_alert, shortcut_name_for};
use gtk4::prelude::*;
use std::cell::Cell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, error, info, warn};
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    File(PathBuf),
    Uri(String),
    CommandLine(String),
}
pub fn add_shortcut(state: &mut LauncherState, shortcut: Shortcut) -> Result<()> {
    if !shortcut.is_complete() {
        return Err(LauncherError::IncompleteInput);
    }
    info!(name = %shortcut.name, "adding shortcut");
    state.settings.apps.push(shortcut);
    state.persist()
}
pub fn replace_shortcut(state: &mut LauncherState, index: usize, shortcut: Shortcut) -> Result<()> {
    if !shortcut.is_complete() {
        return Err(LauncherError::IncompleteInput);
    }
    let slot = state.settings.apps.get_mut(index).ok_or(LauncherError::NotFound(index))?;
    info!(index, name = %shortcut.name, "updating shortcut");
    *slot = shortcut;
    state.persist()
}
pub fn remove_shortcut(state: &mut LauncherState, index: usize) -> Result<Shortcut> {
    if index >= state.settings.apps.len() {
        return Err(LauncherError::NotFound(index));
    }
    let removed = state.settings.apps.remove(index);
    info!(index, name = %removed.name, "removed shortcut");
    state.persist()?;
    Ok(removed)
}
pub fn toggle_theme(state: &mut LauncherState) -> Result<Theme> {
    state.settings.theme = state.settings.theme.toggled();
    debug!(theme = ?state.settings.theme, "theme toggled");
    state.persist()?;
    Ok(state.settings.theme)
}
/// Blank titles are ignored. The settings are written either way.
pub fn rename_title(state: &mut LauncherState, text: &str) -> Result<bool> {
    let title = text.trim();
    let changed = !title.is_empty() && title != state.settings.window_title;
    if changed {
        state.settings.window_title = title.to_string();
    }
    state.persist()?;
    Ok(changed)
}
/// Writes the current settings when the window closes. A file that failed to
/// load has already been moved aside by `load_or_default`.
pub fn save_on_close(state: &LauncherState) -> Result<()> {
    state.persist()?;
    info!(path = %state.store.path().display(), "settings saved on close");
    Ok(())
}
pub fn commit_width(state: &mut LauncherState, width: i32) -> Result<()> {
    state.settings.window_width = clamp_width(width);
    state.persist()
}
pub fn resolve_launch(command: &str) -> Result<LaunchTarget> {
    let cmd = command.trim();
    if cmd.is_empty() {
        return Err(LauncherError::EmptyCommand);
    }
    let path = Path::new(cmd);
    if path.exists() {
        Ok(LaunchTarget::File(path.to_path_buf()))
    } else if has_uri_scheme(cmd) {
        Ok(LaunchTarget::Uri(cmd.to_string()))
    } else {
        Ok(LaunchTarget::CommandLine(cmd.to_string()))
    }
}
fn has_uri_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once(':') else { return false };
    let mut chars = scheme.chars();
    scheme.len() >= 2
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
pub fn launch(target: &LaunchTarget, context: Option<&gio::AppLaunchContext>) -> Result<()> {
    info!(?target, "launching");
    match target {
        LaunchTarget::File(path) => {
            let uri = gio::File::for_path(path).uri();
            gio::AppInfo::launch_default_for_uri(&uri, context)?;
        }
        LaunchTarget::Uri(uri) => gio::AppInfo::launch_default_for_uri(uri, context)?,
        LaunchTarget::CommandLine(cmd) => {
            let app = gio::AppInfo::create_from_commandline(cmd, None, gio::AppInfoCreateFlags::NONE)?;
            app.launch(&[], context)?;
        }
    }
    Ok(())
}
pub fn report_error(widgets: &LauncherWidgets, err: &LauncherError) {
    match err {
        LauncherError::Io { .. } | LauncherError::Json(_) | LauncherError::Launch(_) => error!(error = %err, "action failed"),
        LauncherError::NotFound(index) => warn!(index, "application not found"),
        _ => warn!(error = %err, "action rejected"),
    }
    show_alert(&widgets.window, err.heading(), &err.to_string());
}
pub fn launch_shortcut(widgets: &LauncherWidgets, state: &SharedState, index: usize) {
    let command = match state.borrow().settings.apps.get(index) {
        Some(app) => app.command.clone(),
        None => return report_error(widgets, &LauncherError::NotFound(index)),
    };
    let context = WidgetExt::display(&widgets.window).app_launch_context();
    let result = resolve_launch(&command).and_then(|target| launch(&target, Some(context.upcast_ref())));
    if let Err(e) = result {
        report_error(widgets, &e);
    }
}
pub fn open_add_dialog(widgets: &LauncherWidgets, state: &SharedState, prefill: Option<Shortcut>) -> gtk4::Window {
    let theme = state.borrow().settings.theme;
    let (w, st) = (widgets.clone(), state.clone());
    open_shortcut_dialog(&widgets.window, "Add Application", theme, prefill.as_ref(), move |shortcut| {
        let result = add_shortcut(&mut st.borrow_mut(), shortcut);
        if !matches!(result, Err(LauncherError::IncompleteInput)) {
            refresh(&w, &st);
        }
        result
    })
}
pub fn open_edit_dialog(widgets: &LauncherWidgets, state: &SharedState, index: usize) {
    let (current, theme) = {
        let s = state.borrow();
        (s.settings.apps.get(index).cloned(), s.settings.theme)
    };
    let Some(current) = current else {
        return report_error(widgets, &LauncherError::NotFound(index));
    };
    let (w, st) = (widgets.clone(), state.clone());
    open_shortcut_dialog(&widgets.window, "Edit Application", theme, Some(&current), move |shortcut| {
        let result = replace_shortcut(&mut st.borrow_mut(), index, shortcut);
        if !matches!(result, Err(LauncherError::IncompleteInput)) {
            refresh(&w, &st);
        }
        result
    });
}
pub fn remove_and_refresh(widgets: &LauncherWidgets, state: &SharedState, index: usize) {
    let result = remove_shortcut(&mut state.borrow_mut(), index);
    refresh(widgets, state);
    if let Err(e) = result {
        report_error(widgets, &e);
    }
}
pub fn setup_search_logic(widgets: &LauncherWidgets, state: &SharedState) {
    let (w, st) = (widgets.clone(), state.clone());
    widgets.search_entry.connect_changed(move |e| {
        match st.try_borrow_mut() {
            Ok(mut s) => s.query = e.text().to_string(),
            Err(_) => return,
        }
        render(&w, &st, true);
    });
}
pub fn setup_header_actions(widgets: &LauncherWidgets, state: &SharedState) {
    let (w, st) = (widgets.clone(), state.clone());
    widgets.theme_button.connect_clicked(move |_| {
        let result = toggle_theme(&mut st.borrow_mut());
        let theme = st.borrow().settings.theme;
        apply_theme(&w, theme);
        if let Err(e) = result {
            report_error(&w, &e);
        }
    });
    let (w, st) = (widgets.clone(), state.clone());
    widgets.add_button.connect_clicked(move |_| {
        open_add_dialog(&w, &st, None);
    });
    let win = widgets.window.clone();
    widgets.close_button.connect_clicked(move |_| win.close());
}
pub fn setup_title_editing(widgets: &LauncherWidgets, state: &SharedState) {
    let click = gtk4::GestureClick::new();
    click.set_button(gtk4::gdk::BUTTON_SECONDARY);
    let w = widgets.clone();
    click.connect_pressed(move |_, _, _, _| {
        w.title_entry.set_text(&w.title_label.text());
        w.title_stack.set_visible_child_name("entry");
        w.title_entry.grab_focus();
    });
    widgets.title_label.add_controller(click);
    let (w, st) = (widgets.clone(), state.clone());
    widgets.title_entry.connect_activate(move |_| finish_title_edit(&w, &st));
    let focus = gtk4::EventControllerFocus::new();
    let (w, st) = (widgets.clone(), state.clone());
    focus.connect_leave(move |_| finish_title_edit(&w, &st));
    widgets.title_entry.add_controller(focus);
}
fn finish_title_edit(widgets: &LauncherWidgets, state: &SharedState) {
    if widgets.title_stack.visible_child_name().as_deref() != Some("entry") {
        return;
    }
    widgets.title_stack.set_visible_child_name("label");
    let text = widgets.title_entry.text();
    let result = rename_title(&mut state.borrow_mut(), &text);
    widgets.title_label.set_text(&state.borrow().settings.window_title);
    if let Err(e) = result {
        report_error(widgets, &e);
    }
}
pub fn setup_resize_handle(widgets: &LauncherWidgets, state: &SharedState) {
    let drag = gtk4::GestureDrag::new();
    // Pointer x in window coordinates and the width when the drag started.
    let origin = Rc::new(Cell::new((0.0_f64, 0_i32)));
    let (w, st, o) = (widgets.clone(), state.clone(), origin.clone());
    drag.connect_drag_begin(move |_, x, y| {
        let win_x = w.resize_handle.translate_coordinates(&w.window, x, y).map_or(x, |(wx, _)| wx);
        o.set((win_x, st.borrow().settings.window_width));
    });
    let (w, st, o) = (widgets.clone(), state.clone(), origin);
    drag.connect_drag_update(move |g, dx, _| {
        let Some((sx, sy)) = g.start_point() else { return };
        let Some((win_x, _)) = w.resize_handle.translate_coordinates(&w.window, sx + dx, sy) else { return };
        let (start_x, start_width) = o.get();
        st.borrow_mut().settings.window_width = resized_width(start_width, win_x - start_x);
        apply_window_size(&w, &st.borrow());
    });
    let (w, st) = (widgets.clone(), state.clone());
    drag.connect_drag_end(move |_, _, _| {
        let width = st.borrow().settings.window_width;
        debug!(width, "resize finished");
        if let Err(e) = commit_width(&mut st.borrow_mut(), width) {
            report_error(&w, &e);
        }
    });
    widgets.resize_handle.add_controller(drag);
}
pub fn setup_drop_target(widgets: &LauncherWidgets, state: &SharedState) {
    let target = gtk4::DropTarget::new(gtk4::gdk::FileList::static_type(), gtk4::gdk::DragAction::COPY);
    let (w, st) = (widgets.clone(), state.clone());
    target.connect_drop(move |_, value, _, _| {
        let Ok(list) = value.get::<gtk4::gdk::FileList>() else { return false };
        let queue = dropped_shortcuts(list.files().iter().filter_map(|f| f.path()));
        if queue.is_empty() {
            debug!("drop contained no regular files");
            return false;
        }
        debug!(count = queue.len(), "queued dropped files");
        open_drop_queue(&w, &st, queue);
        true
    });
    widgets.window.add_controller(target);
}
/// Prefilled entries for the regular files among `paths`, in drop order.
pub fn dropped_shortcuts(paths: impl IntoIterator<Item = PathBuf>) -> VecDeque<Shortcut> {
    paths
        .into_iter()
        .filter(|p| p.is_file())
        .map(|p| Shortcut::new(shortcut_name_for(&p), p.to_string_lossy(), None))
        .collect()
}
/// Shows one add dialog at a time; the next opens once the current one is gone.
fn open_drop_queue(widgets: &LauncherWidgets, state: &SharedState, mut queue: VecDeque<Shortcut>) {
    let Some(next) = queue.pop_front() else { return };
    let dialog = open_add_dialog(widgets, state, Some(next));
    if queue.is_empty() {
        return;
    }
    let (w, st, rest) = (widgets.clone(), state.clone(), Cell::new(Some(queue)));
    dialog.connect_destroy(move |_| {
        if let Some(rest) = rest.take() {
            let (w, st) = (w.clone(), st.clone());
            glib::idle_add_local_once(move || open_drop_queue(&w, &st, rest));
        }
    });
}
pub fn setup_window_events(widgets: &LauncherWidgets, state: &SharedState) {
    let st = state.clone();
    widgets.window.connect_close_request(move |_| {
        if let Ok(s) = st.try_borrow() {
            if let Err(e) = save_on_close(&s) {
                error!(error = %e, "could not save settings on close");
            }
        }
        glib::Propagation::Proceed
    });
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, SettingsStore};
    use tempfile::TempDir;
    fn state_in(dir: &TempDir) -> LauncherState {
        LauncherState::new(Settings::default(), SettingsStore::new(dir.path().join("settings.json")))
    }
    fn saved(state: &LauncherState) -> Settings {
        state.store.load().unwrap()
    }
    #[test]
    fn add_rejects_missing_fields_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        for (name, cmd) in [("", "firefox"), ("Firefox", ""), ("  ", " ")] {
            let err = add_shortcut(&mut state, Shortcut::new(name, cmd, None)).unwrap_err();
            assert!(matches!(err, LauncherError::IncompleteInput));
        }
        assert!(state.settings.apps.is_empty());
        assert!(!state.store.path().exists());
    }
    #[test]
    fn add_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        add_shortcut(&mut state, Shortcut::new("Firefox", "firefox", None)).unwrap();
        add_shortcut(&mut state, Shortcut::new("Steam", "steam://open", None)).unwrap();
        let names: Vec<_> = saved(&state).apps.into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Firefox", "Steam"]);
    }
    #[test]
    fn duplicates_are_addressed_by_position() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        let dup = Shortcut::new("Same", "same", None);
        add_shortcut(&mut state, dup.clone()).unwrap();
        add_shortcut(&mut state, dup.clone()).unwrap();
        replace_shortcut(&mut state, 1, Shortcut::new("Other", "other", None)).unwrap();
        assert_eq!(state.settings.apps[0], dup);
        assert_eq!(state.settings.apps[1].name, "Other");
        let removed = remove_shortcut(&mut state, 0).unwrap();
        assert_eq!(removed, dup);
        assert_eq!(saved(&state).apps, vec![Shortcut::new("Other", "other", None)]);
    }
    #[test]
    fn stale_index_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        assert!(matches!(remove_shortcut(&mut state, 0), Err(LauncherError::NotFound(0))));
        let err = replace_shortcut(&mut state, 3, Shortcut::new("a", "b", None)).unwrap_err();
        assert!(matches!(err, LauncherError::NotFound(3)));
    }
    #[test]
    fn edit_validates_before_lookup() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        add_shortcut(&mut state, Shortcut::new("a", "b", None)).unwrap();
        let err = replace_shortcut(&mut state, 0, Shortcut::new("a", "", None)).unwrap_err();
        assert!(matches!(err, LauncherError::IncompleteInput));
        assert_eq!(state.settings.apps[0].command, "b");
    }
    #[test]
    fn theme_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        assert_eq!(toggle_theme(&mut state).unwrap(), Theme::Dark);
        assert_eq!(saved(&state).theme, Theme::Dark);
        assert_eq!(toggle_theme(&mut state).unwrap(), Theme::Light);
    }
    #[test]
    fn blank_title_keeps_the_old_one() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        assert!(rename_title(&mut state, "  My Games  ").unwrap());
        assert_eq!(saved(&state).window_title, "My Games");
        assert!(!rename_title(&mut state, "   ").unwrap());
        assert_eq!(state.settings.window_title, "My Games");
    }
    #[test]
    fn width_commit_clamps_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        commit_width(&mut state, 1400).unwrap();
        assert_eq!(saved(&state).window_width, 1000);
        commit_width(&mut state, 640).unwrap();
        assert_eq!(saved(&state).window_width, 640);
    }
    #[test]
    fn launch_targets_are_classified() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hi").unwrap();
        assert!(matches!(resolve_launch(""), Err(LauncherError::EmptyCommand)));
        assert!(matches!(resolve_launch("   "), Err(LauncherError::EmptyCommand)));
        assert_eq!(resolve_launch(file.to_str().unwrap()).unwrap(), LaunchTarget::File(file.clone()));
        assert_eq!(resolve_launch("https://example.org").unwrap(), LaunchTarget::Uri("https://example.org".into()));
        assert_eq!(resolve_launch("steam://rungameid/10").unwrap(), LaunchTarget::Uri("steam://rungameid/10".into()));
        assert_eq!(resolve_launch("gedit --new-window").unwrap(), LaunchTarget::CommandLine("gedit --new-window".into()));
        assert_eq!(
            resolve_launch("/no/such/file.sh").unwrap(),
            LaunchTarget::CommandLine("/no/such/file.sh".into())
        );
    }
    #[test]
    fn close_after_failed_load_keeps_the_user_file() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let original = r#"{"apps":[{"name":"Doom","command":"/g/doom"}],"theme":7}"#;
        std::fs::write(store.path(), original).unwrap();
        let state = LauncherState::new(store.load_or_default(), store.clone());
        assert!(state.settings.apps.is_empty());
        save_on_close(&state).unwrap();
        assert_eq!(std::fs::read_to_string(store.backup_path()).unwrap(), original);
        assert_eq!(saved(&state), Settings::default());
    }
    #[test]
    fn close_after_partial_entry_keeps_every_entry() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let json = r#"{"apps":[{"name":"Doom","command":"/g/doom"},{"name":"Broken","icon":""}]}"#;
        std::fs::write(store.path(), json).unwrap();
        let state = LauncherState::new(store.load_or_default(), store.clone());
        save_on_close(&state).unwrap();
        let apps = saved(&state).apps;
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[1], Shortcut::new("Broken", "", None));
        assert!(!store.backup_path().exists());
    }
    #[test]
    fn dropped_files_queue_in_order_and_skip_non_files() {
        let dir = TempDir::new().unwrap();
        let game = dir.path().join("doom.sh");
        let doc = dir.path().join("Manual.pdf");
        std::fs::write(&game, "").unwrap();
        std::fs::write(&doc, "").unwrap();
        let folder = dir.path().join("saves");
        std::fs::create_dir(&folder).unwrap();
        let queue = dropped_shortcuts([game.clone(), folder, dir.path().join("gone"), doc.clone()]);
        let names: Vec<_> = queue.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["doom", "Manual"]);
        assert_eq!(queue[0].command, game.to_string_lossy());
        assert_eq!(queue[1].icon, None);
    }
    #[test]
    fn uri_scheme_detection() {
        assert!(has_uri_scheme("mailto:me@example.org"));
        assert!(has_uri_scheme("x-scheme+v1.2:thing"));
        assert!(!has_uri_scheme("c:\\games"));
        assert!(!has_uri_scheme("firefox"));
        assert!(!has_uri_scheme("sh -c 'echo a:b'"));
        assert!(!has_uri_scheme("1abc:def"));
    }
}
