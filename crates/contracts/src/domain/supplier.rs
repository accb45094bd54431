use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Part categories a supplier can be tagged with (multi-select).
pub const PART_GROUPS: [&str; 9] = [
    "ENGINE",
    "TRANSMISSION",
    "SUSPENSION",
    "ELECTRICAL",
    "BODY",
    "INTERIOR",
    "BRAKING",
    "COOLING",
    "LIGHTING",
];

/// Render a category tag for display ("PART_GROUP" -> "PART GROUP").
pub fn tag_label(tag: &str) -> String {
    tag.split('_').collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firm_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    /// 0..=5, absent when the supplier has never been rated.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Category tags; the backend has historically stored these as a JSON
    /// array, a comma separated string, or a bare tag.
    #[serde(default)]
    pub part_groups: TagList,
    #[serde(default)]
    pub part_types: TagList,
}

impl Supplier {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.firm_name.as_deref().unwrap_or("—")
        } else {
            &self.name
        }
    }

    pub fn location(&self) -> String {
        [&self.city, &self.state, &self.pincode]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Tag list tolerant to the three historical wire shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagList(pub Vec<String>);

impl TagList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(TagList(normalize_tags(&value)))
    }
}

fn normalize_tags(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        serde_json::Value::String(s) => {
            // A string may itself hold a JSON array, else treat it as CSV.
            if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(s) {
                return items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierListResponse {
    pub suppliers: Vec<Supplier>,
}

// ============================================================================
// Form DTO
// ============================================================================

/// Add/edit-vendor form state.
#[derive(Debug, Clone, Default)]
pub struct SupplierDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub firm_name: String,
    pub gst_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub rating: String,
    pub part_groups: Vec<String>,
}

impl SupplierDraft {
    pub fn validate(&self) -> Result<SupplierPayload, String> {
        if self.name.trim().is_empty() || self.phone.trim().is_empty() {
            return Err("Please fill in at least name and phone number".into());
        }
        let rating = match self.rating.trim() {
            "" => None,
            raw => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| "Rating must be a number".to_string())?;
                if !(0.0..=5.0).contains(&value) {
                    return Err("Rating must be between 0 and 5".into());
                }
                Some(value)
            }
        };
        Ok(SupplierPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: trimmed_opt(&self.email),
            firm_name: trimmed_opt(&self.firm_name),
            gst_number: trimmed_opt(&self.gst_number),
            address: trimmed_opt(&self.address),
            city: trimmed_opt(&self.city),
            state: trimmed_opt(&self.state),
            pincode: trimmed_opt(&self.pincode),
            rating,
            part_groups: self.part_groups.clone(),
        })
    }

    pub fn from_supplier(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            phone: s.phone.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            firm_name: s.firm_name.clone().unwrap_or_default(),
            gst_number: s.gst_number.clone().unwrap_or_default(),
            address: s.address.clone().unwrap_or_default(),
            city: s.city.clone().unwrap_or_default(),
            state: s.state.clone().unwrap_or_default(),
            pincode: s.pincode.clone().unwrap_or_default(),
            rating: s.rating.map(|r| r.to_string()).unwrap_or_default(),
            part_groups: s.part_groups.0.clone(),
        }
    }
}

fn trimmed_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validated payload for POST/PATCH /api/suppliers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub firm_name: Option<String>,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub rating: Option<f64>,
    pub part_groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_list_accepts_array_csv_and_single() {
        let from_array: TagList = serde_json::from_str(r#"["ENGINE","BODY"]"#).unwrap();
        assert_eq!(from_array.0, vec!["ENGINE", "BODY"]);

        let from_csv: TagList = serde_json::from_str(r#""ENGINE, BODY""#).unwrap();
        assert_eq!(from_csv.0, vec!["ENGINE", "BODY"]);

        let from_single: TagList = serde_json::from_str(r#""ENGINE""#).unwrap();
        assert_eq!(from_single.0, vec!["ENGINE"]);

        let from_embedded: TagList =
            serde_json::from_str(r#""[\"ENGINE\",\"COOLING\"]""#).unwrap();
        assert_eq!(from_embedded.0, vec!["ENGINE", "COOLING"]);

        let from_null: TagList = serde_json::from_str("null").unwrap();
        assert!(from_null.is_empty());
    }

    #[test]
    fn draft_requires_name_and_phone() {
        let mut draft = SupplierDraft::default();
        assert!(draft.validate().is_err());
        draft.name = "Sai Auto Parts".into();
        assert!(draft.validate().is_err());
        draft.phone = "9876543210".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn rating_bounds_enforced() {
        let mut draft = SupplierDraft {
            name: "Sai Auto Parts".into(),
            phone: "9876543210".into(),
            ..SupplierDraft::default()
        };
        draft.rating = "6".into();
        assert!(draft.validate().is_err());
        draft.rating = "abc".into();
        assert!(draft.validate().is_err());
        draft.rating = "4.5".into();
        assert_eq!(draft.validate().unwrap().rating, Some(4.5));
        draft.rating = "".into();
        assert_eq!(draft.validate().unwrap().rating, None);
    }

    #[test]
    fn tag_label_replaces_underscores() {
        assert_eq!(tag_label("PART_GROUP"), "PART GROUP");
        assert_eq!(tag_label("ENGINE"), "ENGINE");
    }
}
