use crate::config::Shortcut;
/// Case-insensitive substring match on names. Each hit keeps its index in `apps`
/// so edits and removals from a filtered grid address the right entry.
pub fn filter_shortcuts<'a>(apps: &'a [Shortcut], query: &str) -> Vec<(usize, &'a Shortcut)> {
    let q = query.to_lowercase();
    apps.iter()
        .enumerate()
        .filter(|(_, app)| q.is_empty() || app.name.to_lowercase().contains(&q))
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    fn apps() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Firefox", "firefox", None),
            Shortcut::new("Steam", "steam", None),
            Shortcut::new("FIRE Tools", "/opt/fire", None),
        ]
    }
    #[test]
    fn empty_query_returns_everything_in_order() {
        let apps = apps();
        let hits = filter_shortcuts(&apps, "");
        assert_eq!(hits.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
    #[test]
    fn matching_ignores_case() {
        let apps = apps();
        let hits = filter_shortcuts(&apps, "fIrE");
        let names: Vec<_> = hits.iter().map(|(_, a)| a.name.as_str()).collect();
        assert_eq!(names, ["Firefox", "FIRE Tools"]);
        assert_eq!(hits[1].0, 2);
    }
    #[test]
    fn query_only_looks_at_names() {
        let apps = apps();
        assert!(filter_shortcuts(&apps, "/opt").is_empty());
        assert_eq!(filter_shortcuts(&apps, "eam").len(), 1);
    }
}
