//! Asset-linkage resolution.
//!
//! Ticket forms restrict the asset catalog to the selected client and
//! narrow it further with a free-text query. The standalone inventory
//! view additionally matches serial numbers. When a ticket's client
//! changes, previously linked assets that the new client does not own
//! are dropped from the selection.

use uuid::Uuid;

use crate::models::asset::Asset;

#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    /// Restrict to assets owned by this client.
    pub client_id: Option<Uuid>,
    /// Case-insensitive substring match against id, brand and model.
    pub query: String,
    /// Also match the serial number (inventory view behavior).
    pub include_serial: bool,
}

impl AssetFilter {
    pub fn for_client(client_id: Uuid) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(client_id) = self.client_id {
            if asset.client_id != client_id {
                return false;
            }
        }
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        asset.id.to_lowercase().contains(&query)
            || asset.brand.to_lowercase().contains(&query)
            || asset.model.to_lowercase().contains(&query)
            || (self.include_serial && asset.serial_number.to_lowercase().contains(&query))
    }

    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Drop selected asset ids that `client_id` does not own. Relative
/// order of the surviving ids is preserved.
pub fn prune_selection(selected: &[String], assets: &[Asset], client_id: Uuid) -> Vec<String> {
    selected
        .iter()
        .filter(|id| {
            assets
                .iter()
                .any(|a| a.client_id == client_id && a.id == **id)
        })
        .cloned()
        .collect()
}
