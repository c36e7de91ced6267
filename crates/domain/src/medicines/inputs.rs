use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct MedicineQuery {
    /// One name or a comma-separated list
    pub medicine_name: String,
    /// One record per recognized name instead of a single best match
    #[serde(default)]
    pub get_all: bool,
}

impl MedicineQuery {
    /// Splits `medicine_name` on commas and trims each segment.
    ///
    /// Order is preserved. Duplicates and empty segments are kept as-is, so
    /// `"Tylenol,"` yields `["Tylenol", ""]`.
    pub fn names(&self) -> Vec<String> {
        self.medicine_name
            .split(',')
            .map(|name| name.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_in_order() {
        let query = MedicineQuery::new(" Tylenol ,Advil,  Aspirin".to_string(), true);
        assert_eq!(query.names(), vec!["Tylenol", "Advil", "Aspirin"]);
    }

    #[test]
    fn single_name_yields_one_segment() {
        let query = MedicineQuery::new("Ibuprofen".to_string(), false);
        assert_eq!(query.names(), vec!["Ibuprofen"]);
    }

    #[test]
    fn keeps_empty_and_duplicate_segments() {
        let query = MedicineQuery::new("Advil, ,Advil,".to_string(), true);
        assert_eq!(query.names(), vec!["Advil", "", "Advil", ""]);
    }

    #[test]
    fn segment_count_matches_commas() {
        for input in ["a", "a,b", "a, b, c", ",", "x,,y,z,"] {
            let query = MedicineQuery::new(input.to_string(), false);
            assert_eq!(query.names().len(), input.matches(',').count() + 1, "{input}");
        }
    }

    #[test]
    fn get_all_defaults_to_false() {
        let query: MedicineQuery =
            serde_json::from_str(r#"{"medicine_name": "Tylenol"}"#).unwrap();
        assert!(!query.get_all);
    }

    #[test]
    fn medicine_name_is_required() {
        let result = serde_json::from_str::<MedicineQuery>(r#"{"get_all": true}"#);
        assert!(result.is_err());
    }
}
