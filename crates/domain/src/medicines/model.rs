use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicineCategory {
    PainRelief,
    Antibiotics,
    Cardiovascular,
    Diabetes,
    Respiratory,
    Digestive,
    VitaminsSupplements,
    SkinCare,
    ColdFlu,
    Allergy,
    MentalHealth,
    WomensHealth,
    EyeCare,
    FirstAid,
}

impl MedicineCategory {
    pub const ALL: [MedicineCategory; 14] = [
        Self::PainRelief,
        Self::Antibiotics,
        Self::Cardiovascular,
        Self::Diabetes,
        Self::Respiratory,
        Self::Digestive,
        Self::VitaminsSupplements,
        Self::SkinCare,
        Self::ColdFlu,
        Self::Allergy,
        Self::MentalHealth,
        Self::WomensHealth,
        Self::EyeCare,
        Self::FirstAid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PainRelief => "pain_relief",
            Self::Antibiotics => "antibiotics",
            Self::Cardiovascular => "cardiovascular",
            Self::Diabetes => "diabetes",
            Self::Respiratory => "respiratory",
            Self::Digestive => "digestive",
            Self::VitaminsSupplements => "vitamins_supplements",
            Self::SkinCare => "skin_care",
            Self::ColdFlu => "cold_flu",
            Self::Allergy => "allergy",
            Self::MentalHealth => "mental_health",
            Self::WomensHealth => "womens_health",
            Self::EyeCare => "eye_care",
            Self::FirstAid => "first_aid",
        }
    }
}

impl fmt::Display for MedicineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedicineCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::validation("category", format!("unknown category '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum DispensingType {
    #[serde(rename = "otc")]
    OverTheCounter,
    #[serde(rename = "prescription")]
    Prescription,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub category: MedicineCategory,
    #[serde(rename = "type")]
    pub dispensing: DispensingType,
    pub description: String,
    pub price: f64,
    pub dosage: String,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub active_ingredients: Vec<String>,
    pub manufacturer: String,
    pub expiry_date: NaiveDate,
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    pub prescription_required: bool,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub usage: String,
    pub created_at: DateTime<Utc>,
}

impl Medicine {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Fails when `wanted` units exceed what is on the shelf.
    pub fn ensure_stock(&self, wanted: u32) -> Result<(), Error> {
        if wanted > self.stock {
            return Err(Error::validation(
                "quantity",
                format!("only {} of {} in stock", self.stock, self.name),
            ));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::validation("price", "must be a non-negative amount"));
        }
        let requires_prescription = self.dispensing == DispensingType::Prescription;
        if self.prescription_required != requires_prescription {
            return Err(Error::validation(
                "prescriptionRequired",
                "must agree with the dispensing type",
            ));
        }
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err(Error::validation("minAge", "must not exceed maxAge"));
            }
        }
        Ok(())
    }
}
