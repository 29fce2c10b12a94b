//! Page header: title, breadcrumb trail, context subtitle, language selector.

use contracts::navigation::{CHILD_CHEMISTRY, SECTION_INPUTS};
use leptos::prelude::*;

use crate::i18n::{use_i18n, LANGUAGES};
use crate::layout::breadcrumb::Breadcrumb;
use crate::navigation::store::NavigationStore;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;

#[component]
pub fn PageHeader() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();

    let subtitle = move || {
        if nav.section() == SECTION_INPUTS && nav.child() == CHILD_CHEMISTRY {
            match nav.unit().as_str() {
                "reactor" => return i18n.t("header.reactor", "Effluent Parameters"),
                "cooling-towers" => return i18n.t("header.coolingTowers", "Operating Limits"),
                _ => {}
            }
        }
        i18n.t("header.default", "Parameter Management")
    };

    let language_options = Signal::derive(move || {
        LANGUAGES
            .iter()
            .map(|&(code, label)| (code.to_string(), i18n.t(&format!("language.{}", code), label)))
            .collect::<Vec<_>>()
    });
    let current_language = Signal::derive(move || i18n.current_language.get());

    view! {
        <header class="app-header">
            <div class="app-header__left">
                <h1 class="app-header__title">
                    {move || i18n.t("header.title", "Lab Analyses and Constant Parameters")}
                </h1>
                <Breadcrumb />
                <div class="app-header__subtitle">{subtitle}</div>
            </div>
            <div class="app-header__right">
                {icon("globe")}
                <Select
                    value=current_language
                    options=language_options
                    on_change=Callback::new(move |code: String| i18n.set_language(&code))
                />
            </div>
        </header>
    }
}
