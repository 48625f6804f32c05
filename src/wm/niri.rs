use super::{spawn_logged, WindowManager};
pub struct Niri;
impl WindowManager for Niri {
    fn name(&self) -> &'static str {
        "niri"
    }
    // niri has no pinning; floating keeps the launcher above tiled columns.
    // The launcher is focused right after mapping, so the focused window is ours.
    fn keep_above(&self, _title: &str) {
        spawn_logged("niri", &["msg", "action", "move-window-to-floating"]);
    }
}
