/// A partner university shown on the landing page grid.
#[derive(Clone, Debug, PartialEq)]
pub struct UniversitySummary {
    pub country: &'static str,
    pub university_name: &'static str,
    pub university_image: &'static str,
    pub program_name: &'static str,
    pub degree_level: &'static str,
    /// Comma separated, e.g. "High Job Demand, Loans".
    pub tags: &'static str,
    pub location: Option<&'static str>,
    pub campus_city: Option<&'static str>,
    pub tuition_first_year: &'static str,
    pub duration: &'static str,
}

impl UniversitySummary {
    pub fn tags(&self) -> Vec<&'static str> {
        self.tags
            .split(", ")
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

pub const UNIVERSITIES: &[UniversitySummary] = &[
    UniversitySummary {
        country: "Canada",
        university_name: "Laurentian University",
        university_image: "https://photos.applyboard.com/schools/000/000/250/logos/small/logo_template_%281%29.png?1544133473",
        program_name: "Master of Science - Computational Sciences (Course)",
        degree_level: "Master's Degree",
        tags: "High Job Demand, Loans, Scholarships Available",
        location: Some("Ontario, CAN"),
        campus_city: Some("Sudbury"),
        tuition_first_year: "$15,876 CAD",
        duration: "12 - 24 months",
    },
    UniversitySummary {
        country: "Germany",
        university_name: "Lancaster University - Leipzig",
        university_image: "https://photos.applyboard.com/schools/000/002/639/logos/small/Lancaster_University_Leipzig_Logo.png?1726602794",
        program_name: "Business Management with Accounting and Finance",
        degree_level: "3-Year Bachelor's Degree",
        tags: "Scholarships Available",
        location: Some("Sachsen, GERMANY"),
        campus_city: None,
        tuition_first_year: "€18,000 EUR",
        duration: "44 months",
    },
    UniversitySummary {
        country: "United Kingdom",
        university_name: "Harper Adams University",
        university_image: "https://photos.applyboard.com/schools/000/002/689/logos/small/harper-adams-logo.png?1738782152",
        program_name: "BSc (Honours) - Business Management",
        degree_level: "3-Year Bachelor's Degree",
        tags: "High Job Demand",
        location: Some("West Midlands, UK"),
        campus_city: None,
        tuition_first_year: "£16,500 GBP",
        duration: "36 months",
    },
    UniversitySummary {
        country: "United States of America",
        university_name: "Westcliff University - Irvine",
        university_image: "https://photos.applyboard.com/schools/000/000/061/logos/small/Westcliff_University.png?1521738847",
        program_name: "Bachelor of Science - Information Technology",
        degree_level: "4-Year Bachelor's Degree",
        tags: "High Job Demand",
        location: Some("California, USA"),
        campus_city: None,
        tuition_first_year: "$23,010 USD",
        duration: "48 months",
    },
];

pub const VISIT_COUNTRIES: &[&str] = &[
    "Thailand",
    "Malaysia",
    "Indonesia",
    "Azerbaijan",
    "Singapore",
    "Hong Kong",
    "Maldives",
];

// Grouped by the partner sheets they came from, unsorted. Sheets may
// repeat a country, so read it through `study_countries()`.
pub const STUDY_COUNTRIES: &[&str] = &[
    // Europe
    "France",
    "Sweden",
    "Germany",
    "Lithuania",
    "Cyprus",
    "Europe",
    // UK and commonwealth
    "UK",
    "Australia",
    "New Zealand",
    "Canada",
    "USA",
    // Asia
    "Georgia",
    "South Korea",
    "China",
    "Malaysia",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_split_and_trimmed() {
        assert_eq!(
            UNIVERSITIES[0].tags(),
            vec!["High Job Demand", "Loans", "Scholarships Available"]
        );
        assert_eq!(UNIVERSITIES[1].tags(), vec!["Scholarships Available"]);
    }

    #[test]
    fn test_every_university_has_a_country() {
        assert!(UNIVERSITIES.iter().all(|u| !u.country.is_empty()));
    }
}
