use serde::{Deserialize, Serialize};

/// Drug information the model is asked to produce for one medicine.
///
/// Responses are relayed untouched; this type only describes the shape the
/// prompt requests. Field order is the order the template is rendered in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct MedicineRecord {
    pub medicine_name: String,
    pub generic_name: String,
    pub strength: String,
    pub uses: Vec<String>,
    pub dosage: Dosage,
    pub side_effects: SideEffects,
    pub precautions: Vec<String>,
    pub interactions: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Dosage {
    pub adults: String,
    pub children: String,
    pub max_daily: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct SideEffects {
    pub common: Vec<String>,
    pub serious: Vec<String>,
}

impl MedicineRecord {
    /// Empty record pretty-printed as JSON, used as the schema template.
    pub fn template() -> String {
        serde_json::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}
