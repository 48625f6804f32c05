use super::{spawn_logged, WindowManager};
pub struct Hyprland;
impl WindowManager for Hyprland {
    fn name(&self) -> &'static str {
        "hyprland"
    }
    // Only floating windows can be pinned.
    fn keep_above(&self, title: &str) {
        let selector = format!("title:^({})$", title);
        let batch = format!("dispatch setfloating {selector} ; dispatch pin {selector}");
        spawn_logged("hyprctl", &["--batch", &batch]);
    }
}
