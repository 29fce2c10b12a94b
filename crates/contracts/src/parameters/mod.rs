//! Lab analysis parameters, grouped for the Inputs → Chemistry tables.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single analysis parameter row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    /// Short code shown in the Parameter column, e.g. "pH" or "Fe".
    pub parameter: String,
    pub value: f64,
    pub group: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub alarm: String,
    #[serde(default)]
    pub description: String,
}

/// A named group of parameters rendered as one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
}

/// Request payload for adding a parameter to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParameter {
    pub group_id: String,
    pub name: String,
    pub parameter: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

fn seed_parameter(
    id: &str,
    name: &str,
    parameter: &str,
    value: f64,
    group: &str,
    unit: &str,
    description: &str,
) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: name.to_string(),
        parameter: parameter.to_string(),
        value,
        group: group.to_string(),
        unit: unit.to_string(),
        alarm: "Normal".to_string(),
        description: description.to_string(),
    }
}

/// The groups a fresh installation starts with.
pub fn default_groups() -> Vec<ParameterGroup> {
    vec![
        ParameterGroup {
            id: "general".to_string(),
            name: "General Parameters".to_string(),
            description: "General water analysis parameters".to_string(),
            parameters: vec![
                seed_parameter(
                    "1",
                    "pH Level",
                    "pH",
                    7.25,
                    "general",
                    "",
                    "Acidity/alkalinity measurement",
                ),
                seed_parameter(
                    "2",
                    "Water Temperature",
                    "Temperature",
                    25.50,
                    "general",
                    "°C",
                    "Water temperature monitoring",
                ),
                seed_parameter(
                    "3",
                    "Water Clarity",
                    "Turbidity",
                    1.20,
                    "general",
                    "NTU",
                    "Measure of water cloudiness",
                ),
            ],
        },
        ParameterGroup {
            id: "chemical".to_string(),
            name: "Chemical Parameters".to_string(),
            description: "Chemical composition and properties".to_string(),
            parameters: vec![
                seed_parameter(
                    "4",
                    "Free Chlorine",
                    "Chlorine",
                    2.10,
                    "chemical",
                    "mg/L",
                    "Chlorine disinfectant level",
                ),
                seed_parameter(
                    "5",
                    "Fluoride Content",
                    "Fluoride",
                    0.80,
                    "chemical",
                    "mg/L",
                    "Fluoride concentration in water",
                ),
            ],
        },
    ]
}

/// Update a parameter's value in place. Unknown ids are ignored.
pub fn update_parameter_value(
    groups: &mut [ParameterGroup],
    group_id: &str,
    parameter_id: &str,
    value: f64,
) {
    if let Some(group) = groups.iter_mut().find(|g| g.id == group_id) {
        if let Some(parameter) = group.parameters.iter_mut().find(|p| p.id == parameter_id) {
            parameter.value = value;
        }
    }
}

/// Append a new parameter with a generated id. Unknown groups are ignored.
pub fn add_parameter(groups: &mut Vec<ParameterGroup>, new: NewParameter) {
    if let Some(group) = groups.iter_mut().find(|g| g.id == new.group_id) {
        group.parameters.push(Parameter {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            parameter: new.parameter,
            value: new.value,
            group: new.group_id,
            unit: new.unit,
            alarm: "Normal".to_string(),
            description: String::new(),
        });
    }
}

/// Remove a parameter from a group. Unknown ids are ignored.
pub fn remove_parameter(groups: &mut [ParameterGroup], group_id: &str, parameter_id: &str) {
    if let Some(group) = groups.iter_mut().find(|g| g.id == group_id) {
        group.parameters.retain(|p| p.id != parameter_id);
    }
}

/// Replace a group's description. Unknown groups are ignored.
pub fn update_group_description(groups: &mut [ParameterGroup], group_id: &str, description: &str) {
    if let Some(group) = groups.iter_mut().find(|g| g.id == group_id) {
        group.description = description.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_groups_match_initial_layout() {
        let groups = default_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "general");
        assert_eq!(groups[0].parameters.len(), 3);
        assert_eq!(groups[1].id, "chemical");
        assert_eq!(groups[1].parameters.len(), 2);
    }

    #[test]
    fn update_value_touches_only_the_target_row() {
        let mut groups = default_groups();
        update_parameter_value(&mut groups, "general", "1", 6.9);
        assert_eq!(groups[0].parameters[0].value, 6.9);
        assert_eq!(groups[0].parameters[1].value, 25.50);
    }

    #[test]
    fn update_value_ignores_unknown_ids() {
        let mut groups = default_groups();
        let before = groups.clone();
        update_parameter_value(&mut groups, "general", "missing", 1.0);
        update_parameter_value(&mut groups, "missing", "1", 1.0);
        assert_eq!(groups, before);
    }

    #[test]
    fn add_parameter_generates_unique_ids() {
        let mut groups = default_groups();
        let new = |name: &str| NewParameter {
            group_id: "chemical".to_string(),
            name: name.to_string(),
            parameter: "Fe".to_string(),
            value: 0.3,
            unit: "mg/L".to_string(),
        };
        add_parameter(&mut groups, new("Iron"));
        add_parameter(&mut groups, new("Iron again"));
        let params = &groups[1].parameters;
        assert_eq!(params.len(), 4);
        assert_ne!(params[2].id, params[3].id);
        assert_eq!(params[2].group, "chemical");
        assert_eq!(params[2].alarm, "Normal");
    }

    #[test]
    fn remove_parameter_drops_the_row() {
        let mut groups = default_groups();
        remove_parameter(&mut groups, "general", "2");
        assert_eq!(groups[0].parameters.len(), 2);
        assert!(groups[0].parameters.iter().all(|p| p.id != "2"));
    }

    #[test]
    fn group_description_can_be_edited() {
        let mut groups = default_groups();
        update_group_description(&mut groups, "chemical", "Trace metals and disinfectants");
        assert_eq!(groups[1].description, "Trace metals and disinfectants");
    }

    #[test]
    fn groups_survive_a_serde_round_trip() {
        let groups = default_groups();
        let json = serde_json::to_string(&groups).unwrap();
        let back: Vec<ParameterGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, groups);
    }
}
