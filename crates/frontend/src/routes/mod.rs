use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::Shell;
use crate::navigation::store::NavigationStore;
use crate::navigation::sync::init_location_sync;
use crate::pages::{CalculatePage, InputsPage, MapPage, NotFoundPage, OutputsPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}

/// Must live inside the router so the location is available. The location
/// synchronizer started here is the single writer of section, child and
/// unit; pages only read the store.
#[component]
fn MainLayout() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    init_location_sync(nav);

    view! {
        <Shell>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=MapPage />
                <Route path=path!("/map") view=MapPage />
                <Route path=path!("/map/:child") view=MapPage />
                <Route path=path!("/inputs") view=InputsPage />
                <Route path=path!("/inputs/:child") view=InputsPage />
                <Route path=path!("/inputs/:child/:unit") view=InputsPage />
                <Route path=path!("/calculate") view=CalculatePage />
                <Route path=path!("/calculate/:child") view=CalculatePage />
                <Route path=path!("/outputs") view=OutputsPage />
                <Route path=path!("/outputs/:child") view=OutputsPage />
            </Routes>
        </Shell>
    }
}
