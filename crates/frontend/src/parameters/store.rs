//! Parameter groups store with localStorage persistence.

use contracts::elements::ChemicalElement;
use contracts::parameters::{self, NewParameter, ParameterGroup};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use crate::shared::api;

const PARAMETERS_STORAGE_KEY: &str = "parametersState";

/// Context store for the parameter tables and the element lookup cache.
#[derive(Clone, Copy)]
pub struct ParametersStore {
    pub groups: RwSignal<Vec<ParameterGroup>>,
    pub available_elements: RwSignal<Vec<ChemicalElement>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ParametersStore {
    pub fn new() -> Self {
        Self {
            groups: RwSignal::new(load_groups_from_storage()),
            available_elements: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn update_parameter(&self, group_id: &str, parameter_id: &str, value: f64) {
        self.groups.update(|groups| {
            parameters::update_parameter_value(groups, group_id, parameter_id, value);
        });
        self.persist();
    }

    pub fn add_parameter(&self, new: NewParameter) {
        self.groups.update(|groups| {
            parameters::add_parameter(groups, new);
        });
        self.persist();
    }

    pub fn remove_parameter(&self, group_id: &str, parameter_id: &str) {
        self.groups.update(|groups| {
            parameters::remove_parameter(groups, group_id, parameter_id);
        });
        self.persist();
    }

    pub fn update_group_description(&self, group_id: &str, description: &str) {
        self.groups.update(|groups| {
            parameters::update_group_description(groups, group_id, description);
        });
        self.persist();
    }

    pub fn group_description(&self, group_id: &str) -> Option<String> {
        self.groups.with_untracked(|groups| {
            groups
                .iter()
                .find(|g| g.id == group_id)
                .map(|g| g.description.clone())
        })
    }

    pub fn group_name(&self, group_id: &str) -> Option<String> {
        self.groups.with_untracked(|groups| {
            groups
                .iter()
                .find(|g| g.id == group_id)
                .map(|g| g.name.clone())
        })
    }

    /// Populate the element cache on first use; subsequent calls are no-ops.
    pub fn ensure_elements_loaded(&self) {
        if !self.available_elements.with_untracked(|e| e.is_empty())
            || self.loading.get_untracked()
        {
            return;
        }
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let elements = api::fetch_chemical_elements().await;
            this.available_elements.set(elements);
            this.loading.set(false);
        });
    }

    fn persist(&self) {
        self.groups.with_untracked(save_groups_to_storage);
    }
}

impl Default for ParametersStore {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_groups_from_storage() -> Vec<ParameterGroup> {
    let storage = match local_storage() {
        Some(s) => s,
        None => return parameters::default_groups(),
    };
    match storage.get_item(PARAMETERS_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<ParameterGroup>>(&raw) {
            Ok(groups) => groups,
            Err(err) => {
                log::error!("discarding unreadable parameters record: {err}");
                parameters::default_groups()
            }
        },
        _ => parameters::default_groups(),
    }
}

fn save_groups_to_storage(groups: &Vec<ParameterGroup>) {
    let storage = match local_storage() {
        Some(s) => s,
        None => return,
    };
    match serde_json::to_string(groups) {
        Ok(json) => {
            if let Err(err) = storage.set_item(PARAMETERS_STORAGE_KEY, &json) {
                log::warn!("failed to persist parameters: {err:?}");
            }
        }
        Err(err) => log::warn!("failed to serialize parameters: {err}"),
    }
}
