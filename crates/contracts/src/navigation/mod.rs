//! Hierarchical navigation selection for the dashboard.
//!
//! The selection has four levels: section → child → unit → sub-tab. Changing
//! a level always clears every level below it, never above (resetting
//! hierarchy). The third level only exists under Inputs → Chemistry, the
//! fourth only when a unit is selected and is never derived from the URL.

use serde::{Deserialize, Serialize};

/// Section that carries second-level children relevant to units.
pub const SECTION_INPUTS: &str = "inputs";
/// The only child under which units are meaningful.
pub const CHILD_CHEMISTRY: &str = "chemistry";

/// Section selected by the root path and by the default state.
pub const DEFAULT_SECTION: &str = "map";

/// The four-level navigation selection.
///
/// Values are opaque strings: they come from trusted path parsing, so the
/// setters do not validate them against the known section/child sets.
/// Persisted as `{ "section", "child", "unit", "subTab" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationState {
    pub section: String,
    pub child: String,
    pub unit: String,
    #[serde(rename = "subTab")]
    pub sub_tab: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            child: String::new(),
            unit: String::new(),
            sub_tab: String::new(),
        }
    }
}

impl NavigationState {
    /// Set the top-level section.
    ///
    /// Leaving `inputs` clears the child; unless the updated state is
    /// inputs → chemistry, unit and sub-tab are cleared as well.
    pub fn set_section(&mut self, value: &str) {
        self.section = value.to_string();
        if self.section != SECTION_INPUTS {
            self.child.clear();
        }
        if self.section != SECTION_INPUTS || self.child != CHILD_CHEMISTRY {
            self.unit.clear();
            self.sub_tab.clear();
        }
    }

    /// Set the second-level child. Leaving `chemistry` clears unit and sub-tab.
    pub fn set_child(&mut self, value: &str) {
        self.child = value.to_string();
        if self.child != CHILD_CHEMISTRY {
            self.unit.clear();
            self.sub_tab.clear();
        }
    }

    /// Set the unit. The sub-tab is always reset when the unit changes.
    pub fn set_unit(&mut self, value: &str) {
        self.unit = value.to_string();
        self.sub_tab.clear();
    }

    /// Set the in-page sub-tab. Leaf level, no cascade.
    pub fn set_sub_tab(&mut self, value: &str) {
        self.sub_tab = value.to_string();
    }

    /// Re-run a tuple through the setter cascade.
    ///
    /// Stored records bypass the setters on load, so a corrupted or
    /// cross-version record could carry a combination the setters can never
    /// produce (e.g. a unit without chemistry). Valid tuples pass through
    /// unchanged.
    pub fn normalized(&self) -> Self {
        let mut state = Self::default();
        state.set_section(&self.section);
        if !self.child.is_empty() {
            state.set_child(&self.child);
        }
        if !self.unit.is_empty()
            && state.section == SECTION_INPUTS
            && state.child == CHILD_CHEMISTRY
        {
            state.set_unit(&self.unit);
        }
        if !self.sub_tab.is_empty() && !state.unit.is_empty() {
            state.set_sub_tab(&self.sub_tab);
        }
        state
    }
}

/// Selection derived from a URL path, applied to the store in level order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    pub section: String,
    pub child: String,
    pub unit: String,
}

impl RoutePath {
    /// Parse a path into a three-level selection.
    ///
    /// Splits on `/` ignoring empty segments. An empty path selects `map`.
    /// The second segment is a child for every section, map included. The
    /// third segment is a unit only under `inputs`. No path shape maps to a
    /// sub-tab.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let section = segments.next().unwrap_or(DEFAULT_SECTION).to_string();
        let child = segments.next().unwrap_or_default().to_string();
        let unit = if section == SECTION_INPUTS {
            segments.next().unwrap_or_default().to_string()
        } else {
            String::new()
        };
        Self {
            section,
            child,
            unit,
        }
    }

    /// Apply this path selection to a state.
    ///
    /// The setters must run in section → child → unit order: each cascade
    /// depends on the level above it being updated first. The unit setter is
    /// only invoked for a non-empty segment, so navigating up to
    /// `/inputs/chemistry` keeps a unit that was selected in-page.
    pub fn apply_to(&self, state: &mut NavigationState) {
        state.set_section(&self.section);
        state.set_child(&self.child);
        if !self.unit.is_empty() {
            state.set_unit(&self.unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(section: &str, child: &str, unit: &str, sub_tab: &str) -> NavigationState {
        NavigationState {
            section: section.to_string(),
            child: child.to_string(),
            unit: unit.to_string(),
            sub_tab: sub_tab.to_string(),
        }
    }

    #[test]
    fn default_selection_is_map() {
        assert_eq!(NavigationState::default(), state("map", "", "", ""));
    }

    #[test]
    fn set_section_away_from_inputs_clears_everything_below() {
        let mut s = state("inputs", "chemistry", "reactor", "effluent-ph");
        s.set_section("calculate");
        assert_eq!(s, state("calculate", "", "", ""));
    }

    #[test]
    fn set_section_to_inputs_keeps_chemistry_child() {
        let mut s = state("inputs", "chemistry", "reactor", "effluent-ph");
        s.set_section("inputs");
        assert_eq!(s, state("inputs", "chemistry", "reactor", "effluent-ph"));
    }

    #[test]
    fn set_section_to_inputs_with_other_child_clears_unit() {
        let mut s = state("inputs", "general", "reactor", "effluent-ph");
        s.set_section("inputs");
        assert_eq!(s, state("inputs", "general", "", ""));
    }

    #[test]
    fn set_child_away_from_chemistry_clears_unit_and_sub_tab() {
        let mut s = state("inputs", "chemistry", "reactor", "effluent-ph");
        s.set_child("general");
        assert_eq!(s, state("inputs", "general", "", ""));
    }

    #[test]
    fn set_unit_always_clears_sub_tab() {
        let mut s = state("inputs", "chemistry", "reactor", "effluent-ph");
        s.set_unit("cooling-towers");
        assert_eq!(s, state("inputs", "chemistry", "cooling-towers", ""));
    }

    #[test]
    fn set_sub_tab_has_no_cascade() {
        let mut s = state("inputs", "chemistry", "reactor", "");
        s.set_sub_tab("effluent-flow");
        assert_eq!(s, state("inputs", "chemistry", "reactor", "effluent-flow"));
    }

    #[test]
    fn setters_are_idempotent() {
        let mut once = state("inputs", "chemistry", "reactor", "effluent-ph");
        let mut twice = once.clone();
        once.set_child("general");
        twice.set_child("general");
        twice.set_child("general");
        assert_eq!(once, twice);
    }

    #[test]
    fn full_drill_down_and_reset() {
        let mut s = NavigationState::default();
        s.set_section("inputs");
        assert_eq!(s, state("inputs", "", "", ""));
        s.set_child("chemistry");
        assert_eq!(s, state("inputs", "chemistry", "", ""));
        s.set_unit("reactor");
        assert_eq!(s, state("inputs", "chemistry", "reactor", ""));
        s.set_section("map");
        assert_eq!(s, state("map", "", "", ""));
    }

    #[test]
    fn arbitrary_section_strings_are_stored_opaquely() {
        let mut s = state("inputs", "chemistry", "reactor", "");
        s.set_section("warehouse");
        assert_eq!(s, state("warehouse", "", "", ""));
    }

    #[test]
    fn parse_root_path_selects_map() {
        assert_eq!(
            RoutePath::parse("/"),
            RoutePath {
                section: "map".to_string(),
                child: String::new(),
                unit: String::new(),
            }
        );
        assert_eq!(RoutePath::parse(""), RoutePath::parse("/"));
    }

    #[test]
    fn parse_inputs_chemistry_reactor() {
        let mut s = NavigationState::default();
        RoutePath::parse("/inputs/chemistry/reactor").apply_to(&mut s);
        assert_eq!(s, state("inputs", "chemistry", "reactor", ""));
    }

    #[test]
    fn parse_keeps_child_symmetry_for_map() {
        let mut s = NavigationState::default();
        RoutePath::parse("/map/overview").apply_to(&mut s);
        assert_eq!(s, state("map", "overview", "", ""));
    }

    #[test]
    fn parse_ignores_unit_segment_outside_inputs() {
        let route = RoutePath::parse("/calculate/models/extra");
        assert_eq!(route.section, "calculate");
        assert_eq!(route.child, "models");
        assert_eq!(route.unit, "");
    }

    #[test]
    fn parse_tolerates_trailing_and_doubled_slashes() {
        assert_eq!(
            RoutePath::parse("/inputs//chemistry/reactor/"),
            RoutePath::parse("/inputs/chemistry/reactor")
        );
    }

    #[test]
    fn navigating_up_to_child_keeps_in_page_unit_and_sub_tab() {
        let mut s = state("inputs", "chemistry", "reactor", "effluent-ph");
        RoutePath::parse("/inputs/chemistry").apply_to(&mut s);
        assert_eq!(s, state("inputs", "chemistry", "reactor", "effluent-ph"));
    }

    #[test]
    fn unknown_path_parses_opaquely() {
        let mut s = NavigationState::default();
        RoutePath::parse("/warehouse/shelf").apply_to(&mut s);
        assert_eq!(s, state("warehouse", "shelf", "", ""));
    }

    #[test]
    fn serde_round_trip_preserves_reachable_states() {
        let s = state("inputs", "chemistry", "cooling-towers", "operating-temp");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<NavigationState>(&json).unwrap(), s);
    }

    #[test]
    fn serde_uses_camel_case_sub_tab_key() {
        let s = state("inputs", "chemistry", "reactor", "effluent-ph");
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"subTab\":\"effluent-ph\""));
    }

    #[test]
    fn partial_record_fills_missing_fields_with_defaults() {
        let s: NavigationState = serde_json::from_str("{\"section\":\"outputs\"}").unwrap();
        assert_eq!(s, state("outputs", "", "", ""));
    }

    #[test]
    fn normalized_passes_valid_tuples_through() {
        let s = state("inputs", "chemistry", "cooling-towers", "");
        assert_eq!(s.normalized(), s);
        let deep = state("inputs", "chemistry", "reactor", "effluent-ph");
        assert_eq!(deep.normalized(), deep);
    }

    #[test]
    fn normalized_repairs_unit_without_chemistry() {
        let s = state("outputs", "reports", "reactor", "effluent-ph");
        assert_eq!(s.normalized(), state("outputs", "reports", "", ""));
    }

    #[test]
    fn normalized_drops_sub_tab_without_unit() {
        let s = state("inputs", "chemistry", "", "effluent-ph");
        assert_eq!(s.normalized(), state("inputs", "chemistry", "", ""));
    }
}
