use gtk4::prelude::*;
use std::path::Path;
pub const GRID_COLUMNS: usize = 6;
pub const ICON_SIZE: i32 = 100;
pub const ICON_IMAGE_SIZE: i32 = 64;
pub const GRID_SPACING: i32 = 20;
pub const HEADER_HEIGHT: i32 = 60;
pub const PADDING: i32 = 20;
pub const MIN_HEIGHT: i32 = 200;
pub const MAX_HEIGHT: i32 = 800;
pub const MIN_WIDTH: i32 = 500;
pub const MAX_WIDTH: i32 = 1000;
pub const RESIZE_MARGIN: i32 = 10;
pub const BOUNCE_HEIGHT: i32 = 20;
pub const BOUNCE_DURATION_MS: f64 = 500.0;
pub fn window_height(count: usize) -> i32 {
    let rows = count.div_ceil(GRID_COLUMNS) as i32;
    let height = if count == 0 {
        PADDING + HEADER_HEIGHT + ICON_SIZE
    } else {
        PADDING + HEADER_HEIGHT + rows * ICON_SIZE + rows * GRID_SPACING
    };
    height.clamp(MIN_HEIGHT, MAX_HEIGHT)
}
pub fn grid_position(index: usize) -> (i32, i32) {
    ((index % GRID_COLUMNS) as i32, (index / GRID_COLUMNS) as i32)
}
pub fn clamp_width(width: i32) -> i32 {
    width.clamp(MIN_WIDTH, MAX_WIDTH)
}
pub fn resized_width(initial: i32, delta: f64) -> i32 {
    clamp_width(initial + delta.round() as i32)
}
pub fn search_visible(shown: usize, filtering: bool) -> bool {
    filtering || shown >= 2
}
/// Vertical lift of a clicked icon at progress `t`, linear between keyframes.
pub fn bounce_offset(t: f64) -> f64 {
    const KEYS: [(f64, f64); 5] = [(0.0, 0.0), (0.25, 20.0), (0.5, 0.0), (0.75, 10.0), (1.0, 0.0)];
    if !(0.0..=1.0).contains(&t) {
        return 0.0;
    }
    for pair in KEYS.windows(2) {
        let ((t0, v0), (t1, v1)) = (pair[0], pair[1]);
        if t <= t1 {
            return v0 + (v1 - v0) * (t - t0) / (t1 - t0);
        }
    }
    0.0
}
pub fn shortcut_name_for(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
pub fn show_alert(parent: &impl IsA<gtk4::Window>, heading: &str, detail: &str) {
    let dialog = gtk4::AlertDialog::builder()
        .modal(true)
        .message(heading)
        .detail(detail)
        .build();
    dialog.show(Some(parent));
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn height_for_empty_and_small_grids() {
        assert_eq!(window_height(0), 200);
        assert_eq!(window_height(1), 200);
        assert_eq!(window_height(7), 20 + 60 + 2 * 120);
    }
    #[test]
    fn height_is_monotonic_and_clamped() {
        let mut last = 0;
        for n in 0..200 {
            let h = window_height(n);
            assert!(h >= last, "height shrank at {n}");
            assert!((MIN_HEIGHT..=MAX_HEIGHT).contains(&h));
            last = h;
        }
        assert_eq!(window_height(1000), MAX_HEIGHT);
    }
    #[test]
    fn grid_wraps_after_six_columns() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(5), (5, 0));
        assert_eq!(grid_position(6), (0, 1));
        assert_eq!(grid_position(13), (1, 2));
    }
    #[test]
    fn resize_clamps_to_width_bounds() {
        assert_eq!(resized_width(700, 50.4), 750);
        assert_eq!(resized_width(700, -400.0), MIN_WIDTH);
        assert_eq!(resized_width(900, 300.0), MAX_WIDTH);
    }
    #[test]
    fn search_bar_rules() {
        assert!(!search_visible(0, false));
        assert!(!search_visible(1, false));
        assert!(search_visible(2, false));
        assert!(search_visible(0, true));
    }
    #[test]
    fn bounce_hits_its_keyframes() {
        assert_eq!(bounce_offset(0.0), 0.0);
        assert_eq!(bounce_offset(0.25), 20.0);
        assert_eq!(bounce_offset(0.5), 0.0);
        assert_eq!(bounce_offset(0.75), 10.0);
        assert_eq!(bounce_offset(1.0), 0.0);
        assert_eq!(bounce_offset(0.125), 10.0);
        assert_eq!(bounce_offset(1.5), 0.0);
    }
    #[test]
    fn dropped_file_name_drops_extension() {
        assert_eq!(shortcut_name_for(Path::new("/home/u/Games/doom.exe")), "doom");
        assert_eq!(shortcut_name_for(Path::new("/home/u/.bashrc")), ".bashrc");
        assert_eq!(shortcut_name_for(Path::new("/home/u/run.tar.gz")), "run.tar");
    }
}
