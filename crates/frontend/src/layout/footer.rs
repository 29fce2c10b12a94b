//! Bottom bar under inputs/chemistry: unit shortcuts plus per-unit
//! sub-tabs.
//!
//! Unit shortcuts navigate by URL. Sub-tabs are in-page only and write
//! straight to the navigation store; they never appear in the path.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::use_i18n;
use crate::layout::unit_navigation::FLOW_CHEMISTRY_TABS;
use crate::navigation::store::NavigationStore;
use crate::shared::components::ui::Select;

// (sub-tab id, tab label, panel title, panel body)
const REACTOR_SUB_TABS: [(&str, &str, &str, &str); 3] = [
    (
        "effluent-ph",
        "pH Control",
        "pH Control Parameters",
        "Monitor and adjust pH levels in the effluent stream.",
    ),
    (
        "effluent-flow",
        "Flow Rate",
        "Flow Rate Monitoring",
        "Track effluent flow rates and adjust as needed.",
    ),
    (
        "effluent-quality",
        "Quality Metrics",
        "Effluent Quality Parameters",
        "Monitor water quality parameters in the effluent.",
    ),
];

const COOLING_TOWER_SUB_TABS: [(&str, &str, &str, &str); 3] = [
    (
        "operating-temp",
        "Temperature",
        "Temperature Limits",
        "Monitor and control cooling tower operating temperatures.",
    ),
    (
        "operating-pressure",
        "Pressure",
        "Pressure Limits",
        "Monitor system pressure within operating limits.",
    ),
    (
        "operating-flow",
        "Flow Control",
        "Flow Rate Control",
        "Optimize flow rates for efficient cooling operation.",
    ),
];

#[derive(Clone, PartialEq)]
struct SubTab {
    key: &'static str,
    label: String,
    title: String,
    body: String,
}

fn static_sub_tabs(defs: &[(&'static str, &'static str, &'static str, &'static str)]) -> Vec<SubTab> {
    defs.iter()
        .map(|&(key, label, title, body)| SubTab {
            key,
            label: label.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect()
}

#[component]
pub fn PageFooter() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();
    let navigate = StoredValue::new(use_navigate());

    let tabs = move || -> Vec<SubTab> {
        match nav.unit().as_str() {
            "" => Vec::new(),
            "reactor" => static_sub_tabs(&REACTOR_SUB_TABS),
            "cooling-towers" => static_sub_tabs(&COOLING_TOWER_SUB_TABS),
            _ => vec![
                SubTab {
                    key: "parameters",
                    label: i18n.t("footer.parameters", "Parameters"),
                    title: i18n.t("footer.parametersTitle", "System Parameters"),
                    body: i18n.t(
                        "footer.parametersDesc",
                        "Configure and monitor system parameters for this unit.",
                    ),
                },
                SubTab {
                    key: "monitoring",
                    label: i18n.t("footer.monitoring", "Monitoring"),
                    title: i18n.t("footer.monitoringTitle", "Real-time Monitoring"),
                    body: i18n.t(
                        "footer.monitoringDesc",
                        "Monitor real-time data and system performance.",
                    ),
                },
                SubTab {
                    key: "controls",
                    label: i18n.t("footer.controls", "Controls"),
                    title: i18n.t("footer.controlsTitle", "System Controls"),
                    body: i18n.t(
                        "footer.controlsDesc",
                        "Access system controls and adjustment settings.",
                    ),
                },
            ],
        }
    };

    // First tab is shown until one is picked.
    let active_key = move || {
        let current = nav.sub_tab();
        let tabs = tabs();
        if !current.is_empty() && tabs.iter().any(|t| t.key == current) {
            current
        } else {
            tabs.first().map(|t| t.key.to_string()).unwrap_or_default()
        }
    };

    let dropdown_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Other Units...".to_string())];
        options.push((
            "ion-exchange".to_string(),
            i18n.t("nav.ionExchange", "Ion Exchange - WMA"),
        ));
        options.push((
            "compliance-points".to_string(),
            i18n.t("nav.compliancePoints", "Compliance Points"),
        ));
        options.extend(
            FLOW_CHEMISTRY_TABS
                .iter()
                .map(|&(key, label_key, fallback)| (key.to_string(), i18n.t(label_key, fallback))),
        );
        options
    });
    let dropdown_value = Signal::derive(move || {
        let unit = nav.unit();
        match unit.as_str() {
            "reactor" | "cooling-towers" => String::new(),
            _ => unit,
        }
    });

    let unit_button = move |key: &'static str, label_key: &'static str, fallback: &'static str| {
        view! {
            <button
                class="app-footer__unit-button"
                class:app-footer__unit-button--active=move || nav.unit() == key
                on:click=move |_| {
                    navigate
                        .with_value(|n| {
                            n(&format!("/inputs/chemistry/{}", key), NavigateOptions::default())
                        });
                }
            >
                {move || i18n.t(label_key, fallback)}
            </button>
        }
    };

    view! {
        <Show when=move || nav.in_chemistry()>
            <div class="app-footer">
                <div class="app-footer__units">
                    <span class="app-footer__units-label">
                        {move || i18n.t("unit.units", "Units")} ":"
                    </span>
                    {unit_button("reactor", "nav.reactor", "Reactor")}
                    {unit_button("cooling-towers", "nav.coolingTowers", "Cooling Towers")}
                    <Select
                        value=dropdown_value
                        options=dropdown_options
                        on_change=Callback::new(move |unit: String| {
                            if !unit.is_empty() {
                                navigate
                                    .with_value(|n| {
                                        n(
                                            &format!("/inputs/chemistry/{}", unit),
                                            NavigateOptions::default(),
                                        )
                                    });
                            }
                        })
                    />
                </div>
                <Show when=move || !nav.unit().is_empty()>
                    <div class="app-footer__tabs">
                        <div class="app-footer__tab-row">
                            {move || {
                                tabs()
                                    .into_iter()
                                    .map(|tab| {
                                        let key = tab.key;
                                        view! {
                                            <button
                                                class="app-footer__tab"
                                                class:app-footer__tab--active=move || active_key() == key
                                                on:click=move |_| nav.set_sub_tab(key)
                                            >
                                                {tab.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        {move || {
                            tabs()
                                .into_iter()
                                .find(|t| t.key == active_key())
                                .map(|tab| {
                                    view! {
                                        <div class="app-footer__panel">
                                            <h4 class="app-footer__panel-title">{tab.title}</h4>
                                            <p class="app-footer__panel-body">{tab.body}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
