use crate::core::layout::Waypoint;
use fnv::FnvHashSet;

/// Lowercase labels of waypoints the user has clicked.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    labels: FnvHashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on `waypoint`: returns the lowercase label for the
    /// click callback and records it unless the waypoint is hidden.
    pub fn record_click(&mut self, waypoint: &Waypoint) -> String {
        let slug = waypoint.slug();
        if !waypoint.hidden() {
            self.insert(&slug);
        }
        slug
    }

    /// Case-insensitive; returns false when the label was already present.
    pub fn insert(&mut self, label: &str) -> bool {
        self.labels.insert(label.to_lowercase())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label.to_lowercase())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Visited labels in a stable, sorted order.
    pub fn sorted(&self) -> Vec<String> {
        let mut out: Vec<String> = self.labels.iter().cloned().collect();
        out.sort();
        out
    }
}
