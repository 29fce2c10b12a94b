use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;
use crate::pages::{NotFoundPage, SectionCard};

// (child id, translation key, fallback label)
const CHILD_CONTENT: [(&str, &str, &str); 4] = [
    ("models", "nav.calculate.models", "Calculation Models"),
    ("batch", "nav.calculate.batch", "Batch Processing"),
    ("realtime", "nav.calculate.realtime", "Real-time Analysis"),
    ("optimization", "nav.calculate.optimization", "Optimization"),
];

// (translation key, fallback label, completion percent)
const PROGRESS_STEPS: [(&str, &str, u32); 5] = [
    ("calculate.inputValidation", "Input Validation", 100),
    ("calculate.chemicalBalance", "Chemical Balance Calculations", 0),
    ("calculate.flowRate", "Flow Rate Optimization", 0),
    ("calculate.compliance", "Compliance Verification", 0),
    ("calculate.reportGeneration", "Report Generation", 0),
];

#[component]
pub fn CalculatePage() -> impl IntoView {
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
                    title=name.clone()
                    heading=name.clone()
                    description=description
                />
            }
            .into_any();
        }

        view! {
            <div class="page">
                <div class="card">
                    <div class="card__header">{move || i18n.t("nav.calculate", "Calculate")}</div>
                    <div class="card__body">
                        <div class="banner banner--info">
                            <h3 class="banner__title">
                                {move || i18n.t("calculate.engineMessage", "Calculation Engine")}
                            </h3>
                            <p class="banner__text">
                                {move || {
                                    i18n.t(
                                        "calculate.engineDescription",
                                        "Process all input parameters through the water treatment calculation models to generate system outputs and recommendations.",
                                    )
                                }}
                            </p>
                        </div>
                        <div class="card-grid">
                            <div class="card card--small">
                                <div class="card__header">
                                    {move || i18n.t("calculate.systemStatus", "System Status")}
                                </div>
                                <div class="card__body card__body--centered">
                                    <p class="card__text">
                                        {move || {
                                            i18n.t(
                                                "calculate.allParametersLoaded",
                                                "All input parameters loaded",
                                            )
                                        }}
                                    </p>
                                    <p class="card__heading">
                                        {move || {
                                            i18n.t(
                                                "calculate.readyForCalculation",
                                                "Ready for Calculation",
                                            )
                                        }}
                                    </p>
                                </div>
                            </div>
                            <div class="card card--small">
                                <div class="card__header">
                                    {move || i18n.t("calculate.lastCalculation", "Last Calculation")}
                                </div>
                                <div class="card__body card__body--centered">
                                    <p class="card__text">
                                        {move || i18n.t("calculate.neverCalculated", "Never calculated")}
                                    </p>
                                    <p class="card__heading">
                                        {move || {
                                            i18n.t("calculate.noPreviousResults", "No Previous Results")
                                        }}
                                    </p>
                                </div>
                            </div>
                        </div>
                        <div class="card__actions card__actions--centered">
                            <Button appearance=ButtonAppearance::Primary>
                                {move || {
                                    i18n.t("calculate.startProcess", "Start Calculation Process")
                                }}
                            </Button>
                        </div>
                        <div class="card card--small">
                            <div class="card__header">
                                {move || i18n.t("calculate.progress", "Calculation Progress")}
                            </div>
                            <div class="card__body">
                                {PROGRESS_STEPS
                                    .iter()
                                    .map(|&(key, fallback, percent)| {
                                        view! {
                                            <div class="progress-row">
                                                <div class="progress-row__labels">
                                                    <span>{move || i18n.t(key, fallback)}</span>
                                                    <span>{format!("{}%", percent)}</span>
                                                </div>
                                                <div class="progress-row__track">
                                                    <div
                                                        class="progress-row__bar"
                                                        style=format!("width: {}%", percent)
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
