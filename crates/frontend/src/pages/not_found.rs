use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::{Button, ButtonAppearance};

use crate::i18n::use_i18n;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    let navigate = StoredValue::new(use_navigate());

    view! {
        <div class="page page--centered">
            <h2 class="page__status">"404"</h2>
            <p class="page__text">
                {move || i18n.t("notFound.message", "The page you are looking for does not exist.")}
            </p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigate.with_value(|n| n("/", NavigateOptions::default()))
            >
                {move || i18n.t("notFound.backHome", "Back to Map")}
            </Button>
        </div>
    }
}
