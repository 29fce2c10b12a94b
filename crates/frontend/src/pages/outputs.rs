use leptos::prelude::*;
use thaw::{
    Button, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use crate::i18n::use_i18n;
use crate::navigation::store::NavigationStore;
use crate::pages::{NotFoundPage, SectionCard};

// (child id, translation key, fallback label)
const CHILD_CONTENT: [(&str, &str, &str); 4] = [
    ("reports", "nav.outputs.reports", "Generated Reports"),
    ("analytics", "nav.outputs.analytics", "Analytics Dashboard"),
    ("exports", "nav.outputs.exports", "Data Exports"),
    ("compliance", "nav.outputs.compliance", "Compliance Reports"),
];

struct OutputRow {
    parameter: &'static str,
    value: &'static str,
    unit: &'static str,
    target: &'static str,
    status: &'static str,
}

// Sample results until the calculation engine is wired in.
const OUTPUT_ROWS: [OutputRow; 5] = [
    OutputRow {
        parameter: "Total Water Flow Rate",
        value: "125.5",
        unit: "L/min",
        target: "120.0",
        status: "optimal",
    },
    OutputRow {
        parameter: "Chemical Efficiency",
        value: "94.2",
        unit: "%",
        target: "90.0",
        status: "good",
    },
    OutputRow {
        parameter: "Energy Consumption",
        value: "2.8",
        unit: "kWh",
        target: "2.5",
        status: "warning",
    },
    OutputRow {
        parameter: "pH Level (Output)",
        value: "7.1",
        unit: "",
        target: "7.0",
        status: "optimal",
    },
    OutputRow {
        parameter: "Chlorine Residual",
        value: "1.8",
        unit: "mg/L",
        target: "2.0",
        status: "good",
    },
];

fn status_class(status: &str) -> &'static str {
    match status {
        "optimal" => "tag tag--optimal",
        "good" => "tag tag--good",
        "warning" => "tag tag--warning",
        "critical" => "tag tag--critical",
        _ => "tag",
    }
}

fn variance(value: &str, target: &str) -> String {
    match (value.parse::<f64>(), target.parse::<f64>()) {
        (Ok(v), Ok(t)) if t != 0.0 => format!("{:+.1}%", (v - t) / t * 100.0),
        _ => "-".to_string(),
    }
}

#[component]
pub fn OutputsPage() -> impl IntoView {
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
                    <div class="card__header">{move || i18n.t("nav.outputs", "Outputs")}</div>
                    <div class="card__body">
                        <div class="card__toolbar">
                            <div>
                                <h3 class="card__heading">
                                    {move || {
                                        i18n.t("outputs.calculationResults", "Calculation Results")
                                    }}
                                </h3>
                                <p class="card__text">
                                    {move || {
                                        i18n.t(
                                            "outputs.generatedFrom",
                                            "Generated from latest input parameters",
                                        )
                                    }}
                                </p>
                            </div>
                            <div class="card__actions">
                                <Button>{move || i18n.t("outputs.exportData", "Export Data")}</Button>
                                <Button>{move || i18n.t("outputs.printReport", "Print Report")}</Button>
                            </div>
                        </div>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>
                                        {move || i18n.t("outputs.outputParameter", "Output Parameter")}
                                    </TableHeaderCell>
                                    <TableHeaderCell>
                                        {move || i18n.t("outputs.calculatedValue", "Calculated Value")}
                                    </TableHeaderCell>
                                    <TableHeaderCell>
                                        {move || i18n.t("table.unit", "Unit")}
                                    </TableHeaderCell>
                                    <TableHeaderCell>
                                        {move || i18n.t("outputs.target", "Target")}
                                    </TableHeaderCell>
                                    <TableHeaderCell>
                                        {move || i18n.t("outputs.status", "Status")}
                                    </TableHeaderCell>
                                    <TableHeaderCell>
                                        {move || i18n.t("outputs.variance", "Variance")}
                                    </TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {OUTPUT_ROWS
                                    .iter()
                                    .map(|row| {
                                        let status_key = format!("outputs.{}", row.status);
                                        let status_fallback = row.status;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{row.parameter}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.value}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {if row.unit.is_empty() { "-" } else { row.unit }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.target}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=status_class(
                                                            row.status,
                                                        )>
                                                            {move || {
                                                                i18n.t(&status_key, status_fallback)
                                                            }}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {variance(row.value, row.target)}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_is_relative_to_target() {
        assert_eq!(variance("125.5", "120.0"), "+4.6%");
        assert_eq!(variance("1.8", "2.0"), "-10.0%");
    }

    #[test]
    fn variance_handles_unparseable_values() {
        assert_eq!(variance("n/a", "120.0"), "-");
        assert_eq!(variance("1.0", "0"), "-");
    }
}
