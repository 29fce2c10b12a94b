//! Single source of truth for the four-level navigation selection.

use contracts::navigation::{NavigationState, RoutePath, CHILD_CHEMISTRY, SECTION_INPUTS};
use leptos::prelude::*;

use super::storage;

/// Context store wrapping the navigation selection.
///
/// All mutations go through the cascading setters of
/// [`contracts::navigation::NavigationState`]; every mutation persists the
/// resulting selection in the same step, so a reader right after a setter
/// sees both the updated signal and the updated durable copy.
#[derive(Clone, Copy)]
pub struct NavigationStore {
    state: RwSignal<NavigationState>,
}

impl NavigationStore {
    /// Rehydrate from storage, or start at the default selection.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(storage::load()),
        }
    }

    pub fn section(&self) -> String {
        self.state.with(|s| s.section.clone())
    }

    pub fn child(&self) -> String {
        self.state.with(|s| s.child.clone())
    }

    pub fn unit(&self) -> String {
        self.state.with(|s| s.unit.clone())
    }

    pub fn sub_tab(&self) -> String {
        self.state.with(|s| s.sub_tab.clone())
    }

    /// True when the unit level is meaningful (Inputs → Chemistry).
    pub fn in_chemistry(&self) -> bool {
        self.state
            .with(|s| s.section == SECTION_INPUTS && s.child == CHILD_CHEMISTRY)
    }

    pub fn set_section(&self, value: &str) {
        self.apply(|s| s.set_section(value));
    }

    pub fn set_child(&self, value: &str) {
        self.apply(|s| s.set_child(value));
    }

    pub fn set_unit(&self, value: &str) {
        self.apply(|s| s.set_unit(value));
    }

    /// The only level written directly by in-page clicks; everything above
    /// it is written exclusively by the location synchronizer.
    pub fn set_sub_tab(&self, value: &str) {
        self.apply(|s| s.set_sub_tab(value));
    }

    /// Apply a parsed path, level by level.
    ///
    /// Section, child and unit must be dispatched in that order: each
    /// setter's cascade depends on the level above it being updated first.
    /// The unit setter only runs for a non-empty segment, so navigating up
    /// to `/inputs/chemistry` keeps a unit selected in-page.
    pub fn apply_route(&self, route: &RoutePath) {
        self.set_section(&route.section);
        self.set_child(&route.child);
        if !route.unit.is_empty() {
            self.set_unit(&route.unit);
        }
    }

    fn apply(&self, f: impl FnOnce(&mut NavigationState)) {
        self.state.update(f);
        self.state.with_untracked(storage::save);
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}
