use crate::i18n::I18n;
use crate::navigation::store::NavigationStore;
use crate::parameters::store::ParametersStore;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Stores are constructed once here and handed to the whole tree via
    // context; nothing below owns ambient state of its own.
    let i18n = I18n::new();
    provide_context(i18n);
    provide_context(NavigationStore::new());
    provide_context(ParametersStore::new());

    // Dictionary for the persisted language, loaded in the background.
    i18n.reload_translations();

    view! {
        <AppRoutes />
    }
}
