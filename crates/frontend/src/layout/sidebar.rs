//! Section menu with expandable children.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;
use crate::shared::icons::icon;

struct MenuGroup {
    id: &'static str,
    label_key: &'static str,
    label: &'static str,
    icon: &'static str,
    // (child id, translation key, fallback label, icon)
    items: &'static [(&'static str, &'static str, &'static str, Option<&'static str>)],
}

const MENU: [MenuGroup; 4] = [
    MenuGroup {
        id: "map",
        label_key: "nav.map",
        label: "Map",
        icon: "map",
        items: &[
            ("overview", "nav.map.overview", "System Overview", Some("map")),
            ("flowchart", "nav.map.flowchart", "Process Flow", None),
            ("monitoring", "nav.map.monitoring", "Monitoring Points", Some("gauge")),
            ("alerts", "nav.map.alerts", "System Alerts", None),
        ],
    },
    MenuGroup {
        id: "inputs",
        label_key: "nav.inputs",
        label: "Inputs",
        icon: "file-input",
        items: &[
            ("general", "nav.general", "General", Some("settings")),
            ("consumption", "nav.consumption", "Consumption", Some("gauge")),
            ("pipes", "nav.pipes", "Pipes", None),
            ("chemistry", "nav.chemistry", "Chemistry", Some("droplets")),
            ("reuse", "nav.reuse", "Reuse", Some("recycle")),
        ],
    },
    MenuGroup {
        id: "calculate",
        label_key: "nav.calculate",
        label: "Calculate",
        icon: "calculator",
        items: &[
            ("models", "nav.calculate.models", "Calculation Models", Some("calculator")),
            ("batch", "nav.calculate.batch", "Batch Processing", None),
            ("realtime", "nav.calculate.realtime", "Real-time Analysis", Some("gauge")),
            ("optimization", "nav.calculate.optimization", "Optimization", None),
        ],
    },
    MenuGroup {
        id: "outputs",
        label_key: "nav.outputs",
        label: "Outputs",
        icon: "file-output",
        items: &[
            ("reports", "nav.outputs.reports", "Generated Reports", Some("file-output")),
            ("analytics", "nav.outputs.analytics", "Analytics Dashboard", None),
            ("exports", "nav.outputs.exports", "Data Exports", None),
            ("compliance", "nav.outputs.compliance", "Compliance Reports", None),
        ],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();
    let navigate = StoredValue::new(use_navigate());

    // Manually toggled groups; the active section is always expanded.
    let expanded_groups = RwSignal::new(Vec::<String>::new());

    view! {
        <nav class="app-sidebar__content">
            {MENU
                .iter()
                .map(|group| {
                    let group_id = group.id;
                    let label_key = group.label_key;
                    let label = group.label;
                    let items = group.items;
                    let is_expanded = move || {
                        nav.section() == group_id
                            || expanded_groups.with(|g| g.iter().any(|x| x == group_id))
                    };
                    let on_group_click = move |_| {
                        expanded_groups.update(|groups| {
                            if let Some(pos) = groups.iter().position(|x| x == group_id) {
                                groups.remove(pos);
                            } else {
                                groups.push(group_id.to_string());
                            }
                        });
                        navigate
                            .with_value(|n| n(&format!("/{}", group_id), NavigateOptions::default()));
                    };

                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    nav.section() == group_id && nav.child().is_empty()
                                }
                                on:click=on_group_click
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{move || i18n.t(label_key, label)}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|&(child_id, child_key, child_label, child_icon)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item app-sidebar__item--child"
                                                    class:app-sidebar__item--active=move || {
                                                        nav.section() == group_id && nav.child() == child_id
                                                    }
                                                    on:click=move |_| {
                                                        navigate
                                                            .with_value(|n| {
                                                                n(
                                                                    &format!("/{}/{}", group_id, child_id),
                                                                    NavigateOptions::default(),
                                                                )
                                                            });
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {child_icon.map(icon)}
                                                        <span>{move || i18n.t(child_key, child_label)}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
