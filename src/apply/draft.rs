use serde::Serialize;

use crate::apply::destinations::OTHER_COUNTRY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaType {
    Study,
    Visit,
}

impl VisaType {
    pub const ALL: [VisaType; 2] = [VisaType::Study, VisaType::Visit];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisaType::Study => "study",
            VisaType::Visit => "visit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisaType::Study => "Study Visa",
            VisaType::Visit => "Visit/Tourist Visa",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Urgency {
    #[serde(rename = "within-3-months")]
    Within3Months,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "just-exploring")]
    JustExploring,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Within3Months,
        Urgency::ThreeToSixMonths,
        Urgency::SixToTwelveMonths,
        Urgency::JustExploring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Within3Months => "within-3-months",
            Urgency::ThreeToSixMonths => "3-6-months",
            Urgency::SixToTwelveMonths => "6-12-months",
            Urgency::JustExploring => "just-exploring",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Within3Months => "Within 3 months",
            Urgency::ThreeToSixMonths => "3-6 months",
            Urgency::SixToTwelveMonths => "6-12 months",
            Urgency::JustExploring => "Just exploring",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeLevel {
    Bachelor,
    Master,
}

impl DegreeLevel {
    pub const ALL: [DegreeLevel; 2] = [DegreeLevel::Bachelor, DegreeLevel::Master];

    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "bachelor",
            DegreeLevel::Master => "master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "Bachelor's",
            DegreeLevel::Master => "Master's",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Free-text inputs of the form, addressed by the `name` attribute of the
/// element that produced the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Phone,
    Address,
    OtherCountry,
    AdditionalNotes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub desired_country: String,
    pub other_country: String,
    pub visa_type: Option<VisaType>,
    pub urgency: Option<Urgency>,
    pub degree_level: Option<DegreeLevel>,
    pub additional_notes: String,
}

impl ApplicationDraft {
    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Address => &mut self.address,
            TextField::OtherCountry => &mut self.other_country,
            TextField::AdditionalNotes => &mut self.additional_notes,
        };
        *slot = value;
    }

    /// A destination picked under one category never survives a switch to
    /// the other. Degree level only exists for study applications.
    pub fn select_visa_type(&mut self, visa_type: Option<VisaType>) {
        if self.visa_type == visa_type {
            return;
        }
        self.visa_type = visa_type;
        self.desired_country.clear();
        self.other_country.clear();
        if visa_type != Some(VisaType::Study) {
            self.degree_level = None;
        }
    }

    pub fn select_country(&mut self, country: String) {
        if country != OTHER_COUNTRY {
            self.other_country.clear();
        }
        self.desired_country = country;
    }

    pub fn wants_other_country(&self) -> bool {
        self.desired_country == OTHER_COUNTRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_visa_type_clears_destination() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Study));
        draft.select_country("France".to_string());
        draft.select_visa_type(Some(VisaType::Visit));
        assert_eq!(draft.desired_country, "");
        assert_eq!(draft.visa_type, Some(VisaType::Visit));
    }

    #[test]
    fn test_switching_visa_type_clears_other_country() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Visit));
        draft.select_country(OTHER_COUNTRY.to_string());
        draft.set_text(TextField::OtherCountry, "Japan".to_string());
        draft.select_visa_type(Some(VisaType::Study));
        assert!(draft.desired_country.is_empty());
        assert!(draft.other_country.is_empty());
    }

    #[test]
    fn test_leaving_study_drops_degree_level() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Study));
        draft.degree_level = Some(DegreeLevel::Master);
        draft.select_visa_type(Some(VisaType::Visit));
        assert_eq!(draft.degree_level, None);
    }

    #[test]
    fn test_reselecting_same_visa_type_keeps_destination() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Study));
        draft.select_country("Germany".to_string());
        draft.select_visa_type(Some(VisaType::Study));
        assert_eq!(draft.desired_country, "Germany");
    }

    #[test]
    fn test_picking_listed_country_drops_free_text() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Study));
        draft.select_country(OTHER_COUNTRY.to_string());
        draft.set_text(TextField::OtherCountry, "Japan".to_string());
        assert!(draft.wants_other_country());
        draft.select_country("Canada".to_string());
        assert!(!draft.wants_other_country());
        assert!(draft.other_country.is_empty());
    }

    #[test]
    fn test_wire_spellings() {
        assert_eq!(serde_json::to_string(&Urgency::ThreeToSixMonths).unwrap(), "\"3-6-months\"");
        assert_eq!(serde_json::to_string(&VisaType::Visit).unwrap(), "\"visit\"");
        assert_eq!(Urgency::parse("just-exploring"), Some(Urgency::JustExploring));
        assert_eq!(Urgency::parse(""), None);
        assert_eq!(DegreeLevel::parse("master"), Some(DegreeLevel::Master));
    }
}
