use super::{spawn_logged, WindowManager};
pub struct Generic;
impl WindowManager for Generic {
    fn name(&self) -> &'static str {
        "generic"
    }
    fn keep_above(&self, title: &str) {
        spawn_logged("wmctrl", &["-r", title, "-b", "add,above"]);
    }
}
