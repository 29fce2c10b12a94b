//! External HTTP lookups.

use contracts::elements::{ChemicalElement, FALLBACK_ELEMENTS};
use gloo_net::http::Request;
use serde::Deserialize;

// PubChem API for chemical elements
const PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

#[derive(Debug, Deserialize)]
struct ListKeyResponse {
    #[serde(rename = "IdentifierList")]
    identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID")]
    cid: Vec<i64>,
}

/// Fetch the element options for the add-parameter select.
///
/// Any failure (network, HTTP status, unexpected payload) degrades to the
/// fixed fallback list; the caller never sees an error.
pub async fn fetch_chemical_elements() -> Vec<ChemicalElement> {
    match try_fetch_elements().await {
        Ok(elements) if !elements.is_empty() => elements,
        Ok(_) => FALLBACK_ELEMENTS.clone(),
        Err(err) => {
            log::warn!("element lookup failed, using fallback list: {err}");
            FALLBACK_ELEMENTS.clone()
        }
    }
}

async fn try_fetch_elements() -> Result<Vec<ChemicalElement>, String> {
    let url = format!("{}/compound/listkey/name/JSON", PUBCHEM_BASE_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ListKeyResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let list = match data.identifier_list {
        Some(list) => list,
        None => return Ok(Vec::new()),
    };

    Ok(list
        .cid
        .into_iter()
        .take(50)
        .enumerate()
        .map(|(index, cid)| ChemicalElement {
            label: format!("Element {}", index + 1),
            value: format!("element_{}", cid),
            formula: Some(format!("E{}", index + 1)),
        })
        .collect())
}
