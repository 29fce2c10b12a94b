//! Dialog for adding a parameter to a group.

use contracts::parameters::NewParameter;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::i18n::use_i18n;
use crate::parameters::store::ParametersStore;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Input, Select};

/// The element list is fetched on first open. Elements already present in
/// the target group are hidden from the dropdown.
#[component]
pub fn AddParameterModal(
    /// Visibility signal owned by the caller
    open: RwSignal<bool>,
    /// Target group id, set by the caller before opening
    group_id: RwSignal<String>,
) -> impl IntoView {
    let params = use_context::<ParametersStore>().expect("ParametersStore not found");
    let i18n = use_i18n();

    let element = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let validation_error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        if open.get() {
            params.ensure_elements_loaded();
        }
    });

    let reset = move || {
        element.set(String::new());
        value.set(String::new());
        unit.set(String::new());
        validation_error.set(None);
    };

    let element_options = Signal::derive(move || {
        let gid = group_id.get();
        let used: Vec<String> = params.groups.with(|groups| {
            groups
                .iter()
                .find(|g| g.id == gid)
                .map(|g| g.parameters.iter().map(|p| p.parameter.clone()).collect())
                .unwrap_or_default()
        });
        let mut options = vec![(
            String::new(),
            i18n.t("placeholder.chooseElement", "Choose an element..."),
        )];
        params.available_elements.with(|elements| {
            options.extend(
                elements
                    .iter()
                    .filter(|e| !used.contains(&e.value))
                    .map(|e| (e.value.clone(), e.label.clone())),
            );
        });
        options
    });

    let save = move |_| {
        let selected = element.get_untracked();
        if selected.is_empty() {
            validation_error.set(Some(i18n.t("validation.required", "This field is required")));
            return;
        }
        let raw_value = value.get_untracked();
        let parsed = if raw_value.trim().is_empty() {
            0.0
        } else {
            match raw_value.trim().parse::<f64>() {
                Ok(v) if !v.is_nan() => v,
                _ => {
                    validation_error
                        .set(Some(i18n.t("message.validNumber", "Please enter a valid number")));
                    return;
                }
            }
        };
        if parsed < 0.0 {
            validation_error
                .set(Some(i18n.t("validation.noNegatives", "Value cannot be negative")));
            return;
        }
        // The element label becomes the display name.
        let name = params
            .available_elements
            .with_untracked(|els| {
                els.iter()
                    .find(|e| e.value == selected)
                    .map(|e| e.label.clone())
            })
            .unwrap_or_else(|| selected.clone());
        params.add_parameter(NewParameter {
            group_id: group_id.get_untracked(),
            name,
            parameter: selected,
            value: parsed,
            unit: unit.get_untracked(),
        });
        reset();
        open.set(false);
    };

    view! {
        <Modal
            open=open
            title=Signal::derive(move || i18n.t("modal.addParameter", "Add Parameter"))
        >
            <div class="modal-body">
                {move || {
                    validation_error.get().map(|msg| view! { <div class="form__error">{msg}</div> })
                }}
                <Select
                    label=Signal::derive(move || {
                        i18n.t("modal.selectElement", "Select Chemical Element")
                    })
                    value=element
                    options=element_options
                    on_change=Callback::new(move |v: String| element.set(v))
                />
                <Show when=move || params.loading.get()>
                    <p class="form__hint">{move || i18n.t("placeholder.loading", "Loading...")}</p>
                </Show>
                <Input
                    label=Signal::derive(move || i18n.t("modal.enterValue", "Enter Value"))
                    value=value
                    placeholder="0.00"
                    on_input=Callback::new(move |v: String| value.set(v))
                />
                <Input
                    label=Signal::derive(move || i18n.t("label.unitOptional", "Unit (Optional)"))
                    value=unit
                    placeholder="e.g., mg/L, ppm, %"
                    on_input=Callback::new(move |v: String| unit.set(v))
                />
            </div>
            <div class="modal-footer">
                <Button on_click=move |_| {
                    reset();
                    open.set(false);
                }>{move || i18n.t("modal.cancel", "Cancel")}</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {move || i18n.t("modal.save", "Save")}
                </Button>
            </div>
        </Modal>
    }
}
