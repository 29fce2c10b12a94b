//! Unit tab strip, shown only under inputs/chemistry.
//!
//! Tabs navigate by URL so the location synchronizer stays the single
//! writer of the unit level.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;

// (unit id, translation key, fallback label)
pub const UNIT_TABS: [(&str, &str, &str); 4] = [
    ("ion-exchange", "nav.ionExchange", "Ion Exchange - WMA"),
    ("reactor", "nav.reactor", "Reactor"),
    ("cooling-towers", "nav.coolingTowers", "Cooling Towers"),
    ("compliance-points", "nav.compliancePoints", "Compliance Points"),
];

pub const FLOW_CHEMISTRY_TABS: [(&str, &str, &str); 4] = [
    ("incoming-water", "nav.incomingWater", "Incoming Water Source Lab Inputs"),
    ("autoci-lab", "nav.autociLab", "AutoCI Lab Inputs"),
    ("chemical-injection", "nav.chemicalInjection", "Chemical Injection Inputs"),
    ("clear-chemistry", "nav.clearChemistry", "Clear Chemistry"),
];

#[component]
pub fn UnitNavigation() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();
    let navigate = StoredValue::new(use_navigate());

    let tab_row = move |tabs: &'static [(&'static str, &'static str, &'static str)]| {
        tabs.iter()
            .map(|&(key, label_key, fallback)| {
                view! {
                    <button
                        class="unit-tabs__tab"
                        class:unit-tabs__tab--active=move || nav.unit() == key
                        on:click=move |_| {
                            navigate
                                .with_value(|n| {
                                    n(
                                        &format!("/inputs/chemistry/{}", key),
                                        NavigateOptions::default(),
                                    )
                                });
                        }
                    >
                        {move || i18n.t(label_key, fallback)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || nav.in_chemistry()>
            <div class="unit-tabs">
                <div class="unit-tabs__section">
                    <h3 class="unit-tabs__heading">{move || i18n.t("unit.units", "Units")}</h3>
                    <div class="unit-tabs__row">{tab_row(&UNIT_TABS)}</div>
                </div>
                <div class="unit-tabs__section">
                    <h3 class="unit-tabs__heading">
                        {move || i18n.t("nav.flowChemistry", "Flow Chemistry")}
                    </h3>
                    <div class="unit-tabs__row">{tab_row(&FLOW_CHEMISTRY_TABS)}</div>
                </div>
            </div>
        </Show>
    }
}
