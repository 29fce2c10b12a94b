//! Dialog for editing a group description.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::i18n::use_i18n;
use crate::parameters::store::ParametersStore;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::Textarea;

const MIN_DESCRIPTION_CHARS: usize = 10;
const MAX_DESCRIPTION_CHARS: u32 = 500;

#[component]
pub fn EditGroupModal(
    /// Visibility signal owned by the caller
    open: RwSignal<bool>,
    /// Target group id, set by the caller before opening
    group_id: RwSignal<String>,
) -> impl IntoView {
    let params = use_context::<ParametersStore>().expect("ParametersStore not found");
    let i18n = use_i18n();

    let description = RwSignal::new(String::new());
    let validation_error = RwSignal::new(Option::<String>::None);

    // Seed the textarea from the current group each time the dialog opens.
    Effect::new(move |_| {
        if open.get() {
            let current = params
                .group_description(&group_id.get_untracked())
                .unwrap_or_default();
            description.set(current);
            validation_error.set(None);
        }
    });

    let title = Signal::derive(move || {
        let name = params.group_name(&group_id.get()).unwrap_or_default();
        format!("{}: {}", i18n.t("modal.editGroup", "Edit Group"), name)
    });

    let save = move |_| {
        let text = description.get_untracked();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            validation_error.set(Some(i18n.t("validation.required", "This field is required")));
            return;
        }
        if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
            validation_error.set(Some(i18n.t(
                "validation.minDescription",
                "Description must be at least 10 characters long",
            )));
            return;
        }
        params.update_group_description(&group_id.get_untracked(), trimmed);
        open.set(false);
    };

    view! {
        <Modal open=open title=title>
            <div class="modal-body">
                {move || {
                    validation_error.get().map(|msg| view! { <div class="form__error">{msg}</div> })
                }}
                <Textarea
                    label=Signal::derive(move || {
                        i18n.t("modal.groupDescription", "Group Description")
                    })
                    value=description
                    on_input=Callback::new(move |v: String| description.set(v))
                    placeholder=Signal::derive(move || {
                        i18n.t(
                            "placeholder.groupDescription",
                            "Enter a detailed description for this parameter group...",
                        )
                    })
                    rows=4
                    max_length=MAX_DESCRIPTION_CHARS
                />
                <div class="form__counter">
                    {move || format!("{}/{}", description.get().chars().count(), MAX_DESCRIPTION_CHARS)}
                </div>
            </div>
            <div class="modal-footer">
                <Button on_click=move |_| open.set(false)>
                    {move || i18n.t("modal.cancel", "Cancel")}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {move || i18n.t("modal.save", "Save")}
                </Button>
            </div>
        </Modal>
    }
}
