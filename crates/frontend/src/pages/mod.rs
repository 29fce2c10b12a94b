mod calculate;
mod inputs;
mod map;
mod not_found;
mod outputs;

pub use calculate::CalculatePage;
pub use inputs::InputsPage;
pub use map::MapPage;
pub use not_found::NotFoundPage;
pub use outputs::OutputsPage;

use leptos::prelude::*;

/// Card with a centered heading and description, used by the placeholder
/// sections that have no dedicated content yet.
#[component]
pub fn SectionCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] heading: Signal<String>,
    #[prop(into)] description: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <div class="card__header">{move || title.get()}</div>
                <div class="card__body card__body--centered">
                    <h3 class="card__heading">{move || heading.get()}</h3>
                    <p class="card__text">{move || description.get()}</p>
                </div>
            </div>
        </div>
    }
}
