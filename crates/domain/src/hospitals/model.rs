use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum BedType {
    #[serde(rename = "ICU")]
    Icu,
    General,
    Special,
}

impl BedType {
    pub const ALL: [BedType; 3] = [BedType::Icu, BedType::General, BedType::Special];
}

/// Free beds per category. Every category is always serialized, missing ones
/// deserialize as zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct BedAvailability {
    #[serde(rename = "ICU", default)]
    pub icu: u32,
    #[serde(rename = "General", default)]
    pub general: u32,
    #[serde(rename = "Special", default)]
    pub special: u32,
}

impl BedAvailability {
    pub fn total(&self) -> u32 {
        self.icu + self.general + self.special
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub address: String,
    #[serde(default = "all_bed_types")]
    pub bed_types: Vec<BedType>,
    #[serde(default)]
    pub available_beds: BedAvailability,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default = "default_distance")]
    pub distance: String,
    #[serde(default = "default_emergency")]
    pub emergency: bool,
}

impl Hospital {
    pub fn total_beds(&self) -> u32 {
        self.available_beds.total()
    }
}

fn all_bed_types() -> Vec<BedType> {
    BedType::ALL.to_vec()
}

fn default_rating() -> f64 {
    4.5
}

fn default_distance() -> String {
    "2.5 km".to_string()
}

fn default_emergency() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_document_gets_defaults() {
        let hospital: Hospital = serde_json::from_value(json!({
            "id": "h1",
            "name": "Bare Clinic",
            "location": "Nowhere",
            "phone": "+1-555-0000",
            "address": "0 Empty Rd",
            "availableBeds": { "General": 4 },
        }))
        .unwrap();

        assert_eq!(hospital.available_beds, BedAvailability::new(0, 4, 0));
        assert_eq!(hospital.bed_types, BedType::ALL.to_vec());
        assert_eq!(hospital.rating, 4.5);
        assert_eq!(hospital.distance, "2.5 km");
        assert!(hospital.emergency);
    }

    #[test]
    fn missing_beds_object_means_zero_everywhere() {
        let hospital: Hospital = serde_json::from_value(json!({
            "id": "h1",
            "name": "n",
            "location": "l",
            "phone": "p",
            "address": "a",
        }))
        .unwrap();

        assert_eq!(hospital.total_beds(), 0);
    }

    #[test]
    fn serializes_every_bed_category() {
        let beds = serde_json::to_value(BedAvailability::default()).unwrap();
        assert_eq!(beds, json!({ "ICU": 0, "General": 0, "Special": 0 }));
    }
}
