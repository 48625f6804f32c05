use std::env;
use std::process::Command;
use tracing::debug;
pub mod niri;
pub mod hyprland;
pub mod generic;
/// Compositor hooks. GTK4 has no portable "always on top", so each backend asks
/// its compositor directly.
pub trait WindowManager {
    fn name(&self) -> &'static str;
    fn keep_above(&self, title: &str);
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Hyprland,
    Niri,
    Generic,
}
pub fn detect() -> Box<dyn WindowManager> {
    match detect_backend(
        &env::var("XDG_CURRENT_DESKTOP").unwrap_or_default(),
        &env::var("DESKTOP_SESSION").unwrap_or_default(),
        env::var("HYPRLAND_INSTANCE_SIGNATURE").is_ok(),
    ) {
        Backend::Niri => Box::new(niri::Niri),
        Backend::Hyprland => Box::new(hyprland::Hyprland),
        Backend::Generic => Box::new(generic::Generic),
    }
}
fn detect_backend(xdg_current: &str, session: &str, hypr_signature: bool) -> Backend {
    let (xdg_current, session) = (xdg_current.to_lowercase(), session.to_lowercase());
    if xdg_current.contains("niri") || session.contains("niri") {
        Backend::Niri
    } else if xdg_current.contains("hyprland") || hypr_signature {
        Backend::Hyprland
    } else {
        Backend::Generic
    }
}
pub(crate) fn spawn_logged(program: &str, args: &[&str]) {
    if let Err(e) = Command::new(program).args(args).spawn() {
        debug!(program, error = %e, "compositor command unavailable");
    }
}
