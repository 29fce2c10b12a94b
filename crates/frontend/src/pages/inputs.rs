//! Inputs section: child categories, chemistry units and the parameter
//! tables with their dialogs.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::layout::unit_navigation::UnitNavigation;
use crate::navigation::store::NavigationStore;
use crate::pages::SectionCard;
use crate::parameters::add_parameter_modal::AddParameterModal;
use crate::parameters::edit_group_modal::EditGroupModal;
use crate::parameters::table::ParametersTable;

struct ChildPlaceholder {
    child: &'static str,
    title_key: &'static str,
    title: &'static str,
    heading_key: &'static str,
    heading: &'static str,
    desc_key: &'static str,
    desc: &'static str,
}

const CHILD_PLACEHOLDERS: [ChildPlaceholder; 4] = [
    ChildPlaceholder {
        child: "general",
        title_key: "nav.general",
        title: "General",
        heading_key: "inputs.general.title",
        heading: "General System Parameters",
        desc_key: "inputs.general.description",
        desc: "Configure basic system parameters and general settings for the water treatment facility.",
    },
    ChildPlaceholder {
        child: "consumption",
        title_key: "nav.consumption",
        title: "Consumption",
        heading_key: "inputs.consumption.title",
        heading: "Water Consumption Analysis",
        desc_key: "inputs.consumption.description",
        desc: "Configure water consumption parameters and monitoring settings.",
    },
    ChildPlaceholder {
        child: "pipes",
        title_key: "nav.pipes",
        title: "Pipes",
        heading_key: "inputs.pipes.title",
        heading: "Pipe System Configuration",
        desc_key: "inputs.pipes.description",
        desc: "Manage pipe network parameters, flow rates, and pressure settings.",
    },
    ChildPlaceholder {
        child: "reuse",
        title_key: "nav.reuse",
        title: "Reuse",
        heading_key: "inputs.reuse.title",
        heading: "Water Reuse System",
        desc_key: "inputs.reuse.description",
        desc: "Configure water reuse parameters and recycling processes.",
    },
];

struct UnitPlaceholder {
    unit: &'static str,
    title_key: &'static str,
    title: &'static str,
    heading_key: &'static str,
    heading: &'static str,
    desc_key: &'static str,
    desc: &'static str,
}

const UNIT_PLACEHOLDERS: [UnitPlaceholder; 7] = [
    UnitPlaceholder {
        unit: "ion-exchange",
        title_key: "nav.ionExchange",
        title: "Ion Exchange - WMA",
        heading_key: "unit.ionExchange",
        heading: "Ion Exchange - WMA Unit",
        desc_key: "unit.ionExchangeDesc",
        desc: "Configure ion exchange parameters and water management area settings.",
    },
    UnitPlaceholder {
        unit: "cooling-towers",
        title_key: "nav.coolingTowers",
        title: "Cooling Towers",
        heading_key: "unit.coolingTowers",
        heading: "Cooling Towers Unit",
        desc_key: "unit.coolingTowersDesc",
        desc: "Configure cooling tower operating limits and parameters.",
    },
    UnitPlaceholder {
        unit: "compliance-points",
        title_key: "nav.compliancePoints",
        title: "Compliance Points",
        heading_key: "unit.compliancePoints",
        heading: "Compliance Points",
        desc_key: "unit.compliancePointsDesc",
        desc: "Monitor and manage environmental compliance parameters.",
    },
    UnitPlaceholder {
        unit: "incoming-water",
        title_key: "nav.incomingWater",
        title: "Incoming Water Source Lab Inputs",
        heading_key: "nav.incomingWater",
        heading: "Incoming Water Source Lab Inputs",
        desc_key: "unit.incomingWaterDesc",
        desc: "Configure parameters for incoming water source lab inputs.",
    },
    UnitPlaceholder {
        unit: "autoci-lab",
        title_key: "nav.autociLab",
        title: "AutoCI Lab Inputs",
        heading_key: "nav.autociLab",
        heading: "AutoCI Lab Inputs",
        desc_key: "unit.autociLabDesc",
        desc: "Configure parameters for AutoCI lab inputs.",
    },
    UnitPlaceholder {
        unit: "chemical-injection",
        title_key: "nav.chemicalInjection",
        title: "Chemical Injection Inputs",
        heading_key: "nav.chemicalInjection",
        heading: "Chemical Injection Inputs",
        desc_key: "unit.chemicalInjectionDesc",
        desc: "Configure parameters for chemical injection inputs.",
    },
    UnitPlaceholder {
        unit: "clear-chemistry",
        title_key: "nav.clearChemistry",
        title: "Clear Chemistry",
        heading_key: "nav.clearChemistry",
        heading: "Clear Chemistry",
        desc_key: "unit.clearChemistryDesc",
        desc: "Configure parameters for clear chemistry.",
    },
];

// (child id, translation key, fallback label, blurb key, blurb)
const CATEGORY_CARDS: [(&str, &str, &str, &str, &str); 5] = [
    ("general", "nav.general", "General", "inputs.basicParameters", "Basic system parameters"),
    (
        "consumption",
        "nav.consumption",
        "Consumption",
        "inputs.waterUsage",
        "Water usage metrics",
    ),
    ("pipes", "nav.pipes", "Pipes", "inputs.pipeNetwork", "Pipe network settings"),
    (
        "chemistry",
        "nav.chemistry",
        "Chemistry",
        "inputs.chemicalAnalysis",
        "Chemical analysis data",
    ),
    ("reuse", "nav.reuse", "Reuse", "inputs.waterRecycling", "Water recycling parameters"),
];

#[component]
pub fn InputsPage() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();

    let add_modal_open = RwSignal::new(false);
    let edit_modal_open = RwSignal::new(false);
    let selected_group_id = RwSignal::new(String::new());

    let on_add_parameter = Callback::new(move |group_id: String| {
        selected_group_id.set(group_id);
        add_modal_open.set(true);
    });
    let on_edit_group = Callback::new(move |group_id: String| {
        selected_group_id.set(group_id);
        edit_modal_open.set(true);
    });

    let chemistry_content = move || {
        let unit = nav.unit();
        if unit.is_empty() {
            return Some(
                view! {
                    <SectionCard
                        title=Signal::derive(move || i18n.t("nav.chemistry", "Chemistry"))
                        heading=Signal::derive(move || i18n.t("nav.chemistry", "Chemistry"))
                        description=Signal::derive(move || {
                            i18n.t(
                                "inputs.chemistry.selectUnit",
                                "Select a unit from the navigation above to configure chemistry parameters.",
                            )
                        })
                    />
                }
                .into_any(),
            );
        }
        if unit == "reactor" {
            return Some(
                view! {
                    <div class="page">
                        <div class="card">
                            <div class="card__header">
                                {move || i18n.t("nav.reactor", "Reactor")}
                            </div>
                            <div class="card__body">
                                <ParametersTable
                                    on_add_parameter=on_add_parameter
                                    on_edit_group=on_edit_group
                                />
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            );
        }
        UNIT_PLACEHOLDERS.iter().find(|p| p.unit == unit).map(|p| {
            let (title_key, title) = (p.title_key, p.title);
            let (heading_key, heading) = (p.heading_key, p.heading);
            let (desc_key, desc) = (p.desc_key, p.desc);
            view! {
                <SectionCard
                    title=Signal::derive(move || i18n.t(title_key, title))
                    heading=Signal::derive(move || i18n.t(heading_key, heading))
                    description=Signal::derive(move || i18n.t(desc_key, desc))
                />
            }
            .into_any()
        })
    };

    let content = move || {
        let child = nav.child();
        if child == "chemistry" {
            return view! {
                <UnitNavigation />
                {chemistry_content}
            }
            .into_any();
        }
        if let Some(p) = CHILD_PLACEHOLDERS.iter().find(|p| p.child == child) {
            let (title_key, title) = (p.title_key, p.title);
            let (heading_key, heading) = (p.heading_key, p.heading);
            let (desc_key, desc) = (p.desc_key, p.desc);
            return view! {
                <SectionCard
                    title=Signal::derive(move || i18n.t(title_key, title))
                    heading=Signal::derive(move || i18n.t(heading_key, heading))
                    description=Signal::derive(move || i18n.t(desc_key, desc))
                />
            }
            .into_any();
        }

        // No category picked yet (also covers unknown categories).
        view! {
            <div class="page">
                <div class="card">
                    <div class="card__header">{move || i18n.t("nav.inputs", "Inputs")}</div>
                    <div class="card__body card__body--centered">
                        <h3 class="card__heading">
                            {move || i18n.t("inputs.parameterTitle", "Input Parameters")}
                        </h3>
                        <p class="card__text">
                            {move || {
                                i18n.t(
                                    "inputs.selectCategory",
                                    "Select a category from the navigation menu to configure specific input parameters.",
                                )
                            }}
                        </p>
                        <div class="card-grid">
                            {CATEGORY_CARDS
                                .iter()
                                .map(|&(_, label_key, label, blurb_key, blurb)| {
                                    view! {
                                        <div class="card card--small">
                                            <h4 class="card__heading">
                                                {move || i18n.t(label_key, label)}
                                            </h4>
                                            <p class="card__text">
                                                {move || i18n.t(blurb_key, blurb)}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        {content}
        <AddParameterModal open=add_modal_open group_id=selected_group_id />
        <EditGroupModal open=edit_modal_open group_id=selected_group_id />
    }
}
