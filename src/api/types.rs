use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named place reference (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub name: String,
}

/// One character record as returned by the listing endpoint.
///
/// Fields the API omits are left empty rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSummary {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub status: String,
    pub gender: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub origin: Place,
    pub location: Place,
}

/// One page of characters plus the total page count for the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub characters: Vec<CharacterSummary>,
    pub total_pages: u32,
}

impl PageResult {
    /// Extracts a page from a decoded listing body.
    ///
    /// Missing or mistyped `info.pages` becomes 0 and a missing or
    /// non-array `results` becomes empty. Entries that cannot be read as a
    /// character are skipped.
    pub fn from_json(body: &Value) -> Self {
        let total_pages = body
            .get("info")
            .and_then(|info| info.get("pages"))
            .and_then(Value::as_u64)
            .map(|pages| u32::try_from(pages).unwrap_or(u32::MAX))
            .unwrap_or(0);

        let characters = body
            .get("results")
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|entry| match CharacterSummary::deserialize(entry) {
                        Ok(character) => Some(character),
                        Err(err) => {
                            tracing::warn!(error = %err, "Skipping unreadable character entry");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            characters,
            total_pages,
        }
    }
}
