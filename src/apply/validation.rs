use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::apply::draft::{ApplicationDraft, DegreeLevel, Urgency, VisaType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    VisaType,
    Name,
    Email,
    Phone,
    Address,
    Destination,
    Urgency,
    DegreeLevel,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::VisaType => "visa type",
            RequiredField::Name => "full name",
            RequiredField::Email => "email address",
            RequiredField::Phone => "phone number",
            RequiredField::Address => "address",
            RequiredField::Destination => "destination country",
            RequiredField::Urgency => "timeline",
            RequiredField::DegreeLevel => "degree level",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose a visa type to continue")]
    MissingVisaType,
    #[error("Please fill all required fields (*): {}", labels(.0))]
    MissingFields(Vec<RequiredField>),
}

fn labels(fields: &[RequiredField]) -> String {
    fields.iter().map(RequiredField::label).collect::<Vec<_>>().join(", ")
}

/// Body of the submission request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub desired_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_country: Option<String>,
    pub visa_type: VisaType,
    pub urgency: Urgency,
    #[serde(serialize_with = "degree_level_or_empty")]
    pub degree_level: Option<DegreeLevel>,
    pub additional_notes: String,
}

fn degree_level_or_empty<S: Serializer>(
    level: &Option<DegreeLevel>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(level.map_or("", |l| l.as_str()))
}

pub fn required_fields(draft: &ApplicationDraft) -> Vec<RequiredField> {
    let mut fields = vec![
        RequiredField::VisaType,
        RequiredField::Name,
        RequiredField::Email,
        RequiredField::Phone,
        RequiredField::Address,
        RequiredField::Destination,
        RequiredField::Urgency,
    ];
    if draft.visa_type == Some(VisaType::Study) {
        fields.push(RequiredField::DegreeLevel);
    }
    fields
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn effective_destination(draft: &ApplicationDraft) -> Option<&str> {
    if draft.wants_other_country() {
        let typed = draft.other_country.trim();
        (!typed.is_empty()).then_some(typed)
    } else {
        (!draft.desired_country.is_empty()).then_some(draft.desired_country.as_str())
    }
}

fn is_satisfied(draft: &ApplicationDraft, field: RequiredField) -> bool {
    match field {
        RequiredField::VisaType => draft.visa_type.is_some(),
        RequiredField::Name => !is_blank(&draft.name),
        RequiredField::Email => !is_blank(&draft.email),
        RequiredField::Phone => !is_blank(&draft.phone),
        RequiredField::Address => !is_blank(&draft.address),
        RequiredField::Destination => effective_destination(draft).is_some(),
        RequiredField::Urgency => draft.urgency.is_some(),
        RequiredField::DegreeLevel => draft.degree_level.is_some(),
    }
}

pub fn missing_fields(draft: &ApplicationDraft) -> Vec<RequiredField> {
    required_fields(draft)
        .into_iter()
        .filter(|field| !is_satisfied(draft, *field))
        .collect()
}

/// Checks the draft and assembles the request body from it.
pub fn validate(draft: &ApplicationDraft) -> Result<ApplicationPayload, ValidationError> {
    let missing = missing_fields(draft);
    let (true, Some(visa_type), Some(urgency), Some(destination)) = (
        missing.is_empty(),
        draft.visa_type,
        draft.urgency,
        effective_destination(draft),
    ) else {
        return Err(ValidationError::MissingFields(missing));
    };
    let destination = destination.to_string();

    Ok(ApplicationPayload {
        name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        address: draft.address.trim().to_string(),
        other_country: draft.wants_other_country().then(|| destination.clone()),
        desired_country: destination,
        visa_type,
        urgency,
        degree_level: draft.degree_level,
        additional_notes: draft.additional_notes.trim().to_string(),
    })
}
