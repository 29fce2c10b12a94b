//! Editable parameter tables, one per group.

use contracts::parameters::ParameterGroup;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::i18n::use_i18n;
use crate::parameters::store::ParametersStore;

fn alarm_class(alarm: &str) -> &'static str {
    match alarm.to_lowercase().as_str() {
        "critical" => "tag tag--critical",
        "warning" => "tag tag--warning",
        "normal" => "tag tag--normal",
        _ => "tag",
    }
}

/// Renders every parameter group as a header plus an editable table.
///
/// Clicking a value cell switches it to an input. Enter or blur saves,
/// Escape cancels. Rejected values surface through the store error signal.
#[component]
pub fn ParametersTable(
    /// Opens the add-parameter dialog for the given group id
    on_add_parameter: Callback<String>,
    /// Opens the group description dialog for the given group id
    on_edit_group: Callback<String>,
) -> impl IntoView {
    let params = use_context::<ParametersStore>().expect("ParametersStore not found");
    let i18n = use_i18n();

    // Id of the parameter whose value cell is in edit mode, empty when none.
    let editing_key = RwSignal::new(String::new());
    let edit_value = RwSignal::new(String::new());

    let save_edit = move |group_id: String, parameter_id: String| {
        let raw = edit_value.get_untracked();
        let value = match raw.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => {
                params
                    .error
                    .set(Some(i18n.t("message.validNumber", "Please enter a valid number")));
                return;
            }
        };
        if value < 0.0 {
            params
                .error
                .set(Some(i18n.t("validation.noNegatives", "Value cannot be negative")));
            return;
        }
        params.error.set(None);
        params.update_parameter(&group_id, &parameter_id, value);
        editing_key.set(String::new());
    };

    let render_group = move |group: ParameterGroup| {
        let group_id_for_add = group.id.clone();
        let group_id_for_edit = group.id.clone();

        let rows = if group.parameters.is_empty() {
            view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout>
                            {move || i18n.t("table.emptyText", "No parameters in this group")}
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        } else {
            group
                .parameters
                .clone()
                .into_iter()
                .map(|record| {
                    let value = record.value;
                    let unit = record.unit.clone();
                    let description = record.description.clone();
                    let alarm = record.alarm.clone();
                    let tag_class = alarm_class(&alarm);

                    let row_id = record.id.clone();
                    let row_group = record.group.clone();

                    let is_editing = {
                        let row_id = row_id.clone();
                        move || editing_key.get() == row_id
                    };
                    let start_edit = {
                        let row_id = row_id.clone();
                        move || {
                            edit_value.set(value.to_string());
                            editing_key.set(row_id.clone());
                        }
                    };

                    let editing_for_show = is_editing.clone();
                    let editing_for_disabled = is_editing.clone();
                    let start_edit_for_cell = start_edit.clone();
                    let start_edit_for_button = start_edit.clone();

                    let id_for_key = row_id.clone();
                    let group_for_key = row_group.clone();
                    let id_for_blur = row_id.clone();
                    let group_for_blur = row_group.clone();
                    let id_for_delete = row_id.clone();
                    let group_for_delete = row_group.clone();

                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>
                                    <span class="parameters__name">{record.name.clone()}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{record.parameter.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Show
                                        when=editing_for_show
                                        fallback=move || {
                                            let start_edit = start_edit_for_cell.clone();
                                            view! {
                                                <div
                                                    class="parameters__value"
                                                    title=move || {
                                                        format!(
                                                            "{}: {}",
                                                            i18n.t("tooltip.rawValue", "Raw value"),
                                                            value,
                                                        )
                                                    }
                                                    on:click=move |_| start_edit()
                                                >
                                                    {format!("{:.2}", value)}
                                                </div>
                                            }
                                        }
                                    >
                                        {
                                            let id_for_key = id_for_key.clone();
                                            let group_for_key = group_for_key.clone();
                                            let id_for_blur = id_for_blur.clone();
                                            let group_for_blur = group_for_blur.clone();
                                            view! {
                                                <input
                                                    class="parameters__value-input"
                                                    type="text"
                                                    autofocus=true
                                                    prop:value=move || edit_value.get()
                                                    on:input=move |ev| {
                                                        edit_value.set(event_target_value(&ev))
                                                    }
                                                    on:keydown={
                                                        let id = id_for_key.clone();
                                                        let group = group_for_key.clone();
                                                        move |ev| match ev.key().as_str() {
                                                            "Enter" => save_edit(group.clone(), id.clone()),
                                                            "Escape" => editing_key.set(String::new()),
                                                            _ => {}
                                                        }
                                                    }
                                                    on:blur={
                                                        let id = id_for_blur.clone();
                                                        let group = group_for_blur.clone();
                                                        move |_| {
                                                            // Enter already closed the editor; skip the
                                                            // trailing blur in that case.
                                                            if editing_key.get_untracked() == id {
                                                                save_edit(group.clone(), id.clone());
                                                            }
                                                        }
                                                    }
                                                />
                                            }
                                        }
                                    </Show>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {if unit.is_empty() { "-".to_string() } else { unit }}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <span class=tag_class>{alarm}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {if description.is_empty() { "-".to_string() } else { description }}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Button
                                        size=thaw::ButtonSize::Small
                                        disabled=Signal::derive(editing_for_disabled)
                                        on_click=move |_| start_edit_for_button()
                                    >
                                        {move || i18n.t("button.edit", "Edit")}
                                    </Button>
                                    <Button
                                        size=thaw::ButtonSize::Small
                                        on_click=move |_| {
                                            params.remove_parameter(&group_for_delete, &id_for_delete)
                                        }
                                    >
                                        {move || i18n.t("button.delete", "Delete")}
                                    </Button>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div class="parameters__group">
                <div class="parameters__group-header">
                    <div>
                        <h4 class="parameters__group-title">{group.name.clone()}</h4>
                        <p class="parameters__group-description">{group.description.clone()}</p>
                    </div>
                    <div class="parameters__group-actions">
                        <Button
                            size=thaw::ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_add_parameter.run(group_id_for_add.clone())
                        >
                            {move || i18n.t("button.addParameter", "Add Parameter")}
                        </Button>
                        <Button
                            size=thaw::ButtonSize::Small
                            on_click=move |_| on_edit_group.run(group_id_for_edit.clone())
                        >
                            {move || i18n.t("button.editGroup", "Edit Group")}
                        </Button>
                    </div>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || i18n.t("table.name", "Name")}</TableHeaderCell>
                            <TableHeaderCell>
                                {move || i18n.t("table.parameter", "Parameter")}
                            </TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("table.value", "Value")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("table.unit", "Unit")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("table.alarm", "Alarm")}</TableHeaderCell>
                            <TableHeaderCell>
                                {move || i18n.t("table.description", "Description")}
                            </TableHeaderCell>
                            <TableHeaderCell>
                                {move || i18n.t("table.actions", "Actions")}
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>
        }
    };

    view! {
        <div class="parameters">
            {move || {
                params
                    .error
                    .get()
                    .map(|msg| {
                        view! {
                            <div class="parameters__error" on:click=move |_| params.error.set(None)>
                                {msg}
                            </div>
                        }
                    })
            }}
            {move || {
                let groups = params.groups.get();
                if groups.is_empty() {
                    view! {
                        <div class="parameters__empty">
                            <p>{move || i18n.t("table.noGroups", "No parameter groups available")}</p>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_add_parameter.run("general".to_string())
                            >
                                {move || i18n.t("button.addFirstParameter", "Add First Parameter")}
                            </Button>
                        </div>
                    }
                        .into_any()
                } else {
                    groups.into_iter().map(render_group).collect_view().into_any()
                }
            }}
        </div>
    }
}
