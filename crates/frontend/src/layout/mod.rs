pub mod breadcrumb;
pub mod footer;
pub mod header;
pub mod sidebar;
pub mod unit_navigation;

use leptos::prelude::*;

/// Application frame: header on top, sidebar on the left, page content
/// in the middle, footer with unit shortcuts and sub-tabs at the bottom.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::PageHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <sidebar::Sidebar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
            <footer::PageFooter />
        </div>
    }
}
