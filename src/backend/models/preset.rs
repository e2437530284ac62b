//! Preference presets and the search criteria they fill in.

use serde::{Deserialize, Serialize};

use super::reference::{self, ApprovalStatusId};

/// Filter values stored with a preset. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub property_type: Option<String>,
    pub legal_document_id: Option<u32>,
    pub status: Option<ApprovalStatusId>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    pub location: Option<String>,
}

/// Named, server-stored search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencePreset {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "criteria")]
    pub filters: SearchFilters,
}

// Presets come back with either numeric or string ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Current state of the search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub filters: SearchFilters,
    pub preset_id: Option<String>,
}

impl SearchCriteria {
    /// Replaces the form with the preset's filters.
    ///
    /// Values that do not match a reference table entry are dropped.
    pub fn apply_preset(&mut self, preset: &PreferencePreset) {
        let mut filters = preset.filters.clone();

        if let Some(kind) = filters.property_type.as_deref()
            && reference::find_property_type(kind).is_none()
        {
            log::warn!("Preset {} has unknown property type {kind}", preset.id);
            filters.property_type = None;
        }
        if let Some(id) = filters.legal_document_id
            && reference::find_legal_document_kind(id).is_none()
        {
            log::warn!("Preset {} has unknown legal document {id}", preset.id);
            filters.legal_document_id = None;
        }

        self.filters = filters;
        self.preset_id = Some(preset.id.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of filters currently set.
    pub fn active_count(&self) -> usize {
        let f = &self.filters;
        [
            f.property_type.is_some(),
            f.legal_document_id.is_some(),
            f.status.is_some(),
            f.min_price.is_some(),
            f.max_price.is_some(),
            f.min_area.is_some(),
            f.max_area.is_some(),
            f.location.as_deref().is_some_and(|l| !l.trim().is_empty()),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preset(filters: serde_json::Value) -> PreferencePreset {
        serde_json::from_value(json!({ "id": 7, "name": "Quận 7", "filters": filters })).unwrap()
    }

    #[test]
    fn numeric_ids_become_strings() {
        let p = preset(json!({}));
        assert_eq!(p.id, "7");
        assert_eq!(p.filters, SearchFilters::default());
    }

    #[test]
    fn criteria_alias_is_accepted() {
        let p: PreferencePreset = serde_json::from_value(json!({
            "id": "abc",
            "name": "Biệt thự",
            "criteria": { "propertyType": "bietthu", "status": "APPROVED" }
        }))
        .unwrap();
        assert_eq!(p.filters.property_type.as_deref(), Some("bietthu"));
        assert_eq!(p.filters.status, Some(ApprovalStatusId::Approved));
    }

    #[test]
    fn apply_preset_replaces_the_form() {
        let mut criteria = SearchCriteria::default();
        criteria.filters.location = Some("Hà Nội".into());

        criteria.apply_preset(&preset(json!({
            "propertyType": "canho",
            "legalDocumentId": 2,
            "minPrice": 1_000_000_000u64
        })));

        assert_eq!(criteria.preset_id.as_deref(), Some("7"));
        assert_eq!(criteria.filters.property_type.as_deref(), Some("canho"));
        assert_eq!(criteria.filters.location, None);
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn apply_preset_drops_unknown_reference_values() {
        let mut criteria = SearchCriteria::default();
        criteria.apply_preset(&preset(json!({
            "propertyType": "lau-dai",
            "legalDocumentId": 42
        })));
        assert_eq!(criteria.filters.property_type, None);
        assert_eq!(criteria.filters.legal_document_id, None);
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut criteria = SearchCriteria::default();
        criteria.apply_preset(&preset(json!({ "propertyType": "nha" })));
        criteria.clear();
        assert_eq!(criteria, SearchCriteria::default());
    }
}
