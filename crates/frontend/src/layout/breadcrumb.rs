//! Breadcrumb trail over the current navigation tuple.

use contracts::navigation::{CHILD_CHEMISTRY, DEFAULT_SECTION, SECTION_INPUTS};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;
use crate::shared::icons::icon;

/// Kebab-case to camelCase, used to derive translation keys from path
/// segments ("cooling-towers" -> "coolingTowers").
fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper_next = false;
    for c in segment.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Display fallback for untranslated segments ("cooling-towers" ->
/// "Cooling Towers").
fn format_segment_name(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let nav = use_context::<NavigationStore>().expect("NavigationStore not found");
    let i18n = use_i18n();
    let navigate = StoredValue::new(use_navigate());

    let trail = move || {
        let section = nav.section();
        let child = nav.child();
        let unit = nav.unit();

        let mut items: Vec<AnyView> = Vec::new();
        if section.is_empty() || section == DEFAULT_SECTION {
            return items;
        }

        let section_label = i18n.t(&format!("nav.{}", section), &format_segment_name(&section));
        let section_href = format!("/{}", section);
        items.push(view! { <span class="breadcrumb__separator">">"</span> }.into_any());
        items.push(
            view! {
                <span
                    class="breadcrumb__item breadcrumb__item--link"
                    on:click=move |_| {
                        navigate.with_value(|n| n(&section_href, NavigateOptions::default()))
                    }
                >
                    {section_label}
                </span>
            }
            .into_any(),
        );

        if !child.is_empty() {
            let child_label = i18n.t(&format!("nav.{}", child), &format_segment_name(&child));
            let child_href = format!("/{}/{}", section, child);
            items.push(view! { <span class="breadcrumb__separator">">"</span> }.into_any());
            items.push(
                view! {
                    <span
                        class="breadcrumb__item breadcrumb__item--link"
                        on:click=move |_| {
                            navigate.with_value(|n| n(&child_href, NavigateOptions::default()))
                        }
                    >
                        {child_label}
                    </span>
                }
                .into_any(),
            );

            if !unit.is_empty() && section == SECTION_INPUTS && child == CHILD_CHEMISTRY {
                let unit_label =
                    i18n.t(&format!("nav.{}", camel_case(&unit)), &format_segment_name(&unit));
                items.push(view! { <span class="breadcrumb__separator">">"</span> }.into_any());
                items.push(
                    view! { <span class="breadcrumb__item">{unit_label}</span> }.into_any(),
                );
            }
        }

        items
    };

    view! {
        <nav class="breadcrumb">
            <span
                class="breadcrumb__item breadcrumb__item--link"
                on:click=move |_| navigate.with_value(|n| n("/", NavigateOptions::default()))
            >
                {icon("home")}
                <span>{move || i18n.t("breadcrumb.home", "Map")}</span>
            </span>
            {trail}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_converts_kebab_segments() {
        assert_eq!(camel_case("cooling-towers"), "coolingTowers");
        assert_eq!(camel_case("ion-exchange"), "ionExchange");
        assert_eq!(camel_case("reactor"), "reactor");
    }

    #[test]
    fn format_segment_name_title_cases_words() {
        assert_eq!(format_segment_name("cooling-towers"), "Cooling Towers");
        assert_eq!(format_segment_name("compliance-points"), "Compliance Points");
        assert_eq!(format_segment_name("reactor"), "Reactor");
    }
}
