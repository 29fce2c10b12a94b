//! URL → store synchronization.
//!
//! The path is the outer representation of section/child/unit; this effect
//! is the only writer of those levels. In-page interactions that change them
//! must navigate instead of touching the store, so the two can never
//! diverge. The sync is one-directional and non-incremental: every
//! navigation event re-derives the selection from the path from scratch.

use contracts::navigation::RoutePath;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::store::NavigationStore;

/// Install the location effect. Must be called once, inside the `Router`.
///
/// Runs on the initial load and on every subsequent navigation event
/// (link click, back/forward).
pub fn init_location_sync(nav: NavigationStore) {
    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        nav.apply_route(&RoutePath::parse(&path));
    });
}
