use leptos::prelude::*;

use crate::shared::icons::icon;

/// Overlay modal. Clicking the overlay or the close button dismisses it;
/// clicks inside the content do not propagate to the overlay.
#[component]
pub fn Modal(
    /// Visibility signal owned by the caller
    open: RwSignal<bool>,
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{move || title.get()}</h3>
                        <button class="modal-close" on:click=move |_| open.set(false)>
                            {icon("x")}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
