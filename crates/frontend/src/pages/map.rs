use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;
use crate::pages::{NotFoundPage, SectionCard};

// (child id, translation key, fallback label)
const CHILD_CONTENT: [(&str, &str, &str); 4] = [
    ("overview", "nav.map.overview", "System Overview"),
    ("flowchart", "nav.map.flowchart", "Process Flow"),
    ("monitoring", "nav.map.monitoring", "Monitoring Points"),
    ("alerts", "nav.map.alerts", "System Alerts"),
];

#[component]
pub fn MapPage() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();

    move || {
        let child = nav.child();
        if !child.is_empty() {
            let Some(&(_, key, fallback)) =
                CHILD_CONTENT.iter().find(|&&(id, _, _)| id == child)
            else {
                return view! { <NotFoundPage /> }.into_any();
            };
            let name = i18n.t(key, fallback);
            let description = i18n
                .t(
                    "page.underDevelopmentLower",
                    "This {name} section is under development.",
                )
                .replace("{name}", &name.to_lowercase());
            return view! {
                <SectionCard
                    title=Signal::derive(move || i18n.t("nav.map", "Map"))
                    heading=name.clone()
                    description=description
                />
            }
            .into_any();
        }

        view! {
            <div class="page">
                <div class="card">
                    <div class="card__header">{move || i18n.t("nav.map", "Map")}</div>
                    <div class="card__body">
                        <h3 class="card__heading">
                            {move || i18n.t("map.interactiveTitle", "Interactive System Map")}
                        </h3>
                        <p class="card__text">
                            {move || {
                                i18n.t(
                                    "map.description",
                                    "This section will display an interactive map of the laboratory system, showing water flow, processing units, and monitoring points.",
                                )
                            }}
                        </p>
                        <div class="card__placeholder">
                            {move || {
                                i18n.t("map.placeholder", "Map Visualization Placeholder")
                            }}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
