use std::sync::Arc;

use chrono::{DateTime, Utc};
use ulid::Ulid;

use super::{inputs::CreatePrescriptionInput, Prescription};
use crate::{
    errors::Error,
    listing::MAX_LIST_RESULTS,
    store::{from_document, to_document, DocumentStore, Filter, PRESCRIPTIONS},
};

const ENTITY: &str = "Prescription";

pub struct PrescriptionService {
    store: Arc<dyn DocumentStore>,
}

impl PrescriptionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CreatePrescriptionInput) -> Result<Prescription, Error> {
        let now = Utc::now();
        validate(&input, now)?;

        let prescription = Prescription {
            id: Ulid::new().to_string(),
            user_id: input.user_id,
            doctor_name: input.doctor_name,
            hospital_name: input.hospital_name,
            prescription_date: input.prescription_date,
            medicines: input.medicines,
            notes: input.notes,
            image_url: input.image_url.filter(|url| !url.trim().is_empty()),
            is_used: false,
            created_at: now,
        };

        self.store
            .insert_one(PRESCRIPTIONS, to_document(&prescription)?)
            .await?;

        tracing::info!(
            prescription_id = %prescription.id,
            user_id = %prescription.user_id,
            "Prescription stored"
        );

        Ok(prescription)
    }

    /// Newest prescription date first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Prescription>, Error> {
        let mut prescriptions = self
            .store
            .find(
                PRESCRIPTIONS,
                &Filter::eq("userId", user_id),
                MAX_LIST_RESULTS,
            )
            .await?
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<Prescription>, _>>()?;

        prescriptions.sort_by(|a, b| b.prescription_date.cmp(&a.prescription_date));
        Ok(prescriptions)
    }

    pub async fn get(&self, id: &str) -> Result<Prescription, Error> {
        self.store
            .get(PRESCRIPTIONS, id)
            .await?
            .map(from_document)
            .transpose()?
            .ok_or_else(|| Error::not_found(ENTITY))
    }

    /// A prescription the user can still order against.
    pub async fn usable_by(&self, id: &str, user_id: &str) -> Result<Prescription, Error> {
        let prescription = self.get(id).await?;
        if prescription.user_id != user_id {
            return Err(Error::Forbidden);
        }
        if prescription.is_used {
            return Err(Error::validation(
                "prescriptionId",
                "prescription has already been used",
            ));
        }
        Ok(prescription)
    }

    pub async fn mark_used(&self, id: &str) -> Result<Prescription, Error> {
        let mut prescription = self.get(id).await?;
        prescription.is_used = true;
        self.store
            .replace_one(PRESCRIPTIONS, id, to_document(&prescription)?)
            .await?;
        Ok(prescription)
    }
}

fn validate(input: &CreatePrescriptionInput, now: DateTime<Utc>) -> Result<(), Error> {
    for (field, value) in [
        ("userId", &input.user_id),
        ("doctorName", &input.doctor_name),
        ("hospitalName", &input.hospital_name),
    ] {
        if value.trim().is_empty() {
            return Err(Error::validation(field, "must not be empty"));
        }
    }

    if input.medicines.is_empty() {
        return Err(Error::validation("medicines", "at least one medicine is required"));
    }
    if input
        .medicines
        .iter()
        .any(|medicine| medicine.medicine_name.trim().is_empty())
    {
        return Err(Error::validation("medicines", "every medicine needs a name"));
    }

    if input.prescription_date > now {
        return Err(Error::validation(
            "prescriptionDate",
            "must not be in the future",
        ));
    }

    Ok(())
}
