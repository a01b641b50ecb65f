use crate::apply::draft::VisaType;
use crate::data::countries::{STUDY_COUNTRIES, VISIT_COUNTRIES};

/// Form value of the "my country is not listed" entry.
pub const OTHER_COUNTRY: &str = "other";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationOption {
    Listed(&'static str),
    Other,
}

impl DestinationOption {
    pub fn value(&self) -> &'static str {
        match self {
            DestinationOption::Listed(country) => country,
            DestinationOption::Other => OTHER_COUNTRY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DestinationOption::Listed(country) => country,
            DestinationOption::Other => "Other (type it in)",
        }
    }
}

fn sorted_unique(countries: &[&'static str]) -> Vec<&'static str> {
    let mut countries = countries.to_vec();
    countries.sort_unstable();
    countries.dedup();
    countries
}

pub fn study_countries() -> Vec<&'static str> {
    sorted_unique(STUDY_COUNTRIES)
}

pub fn visit_countries() -> Vec<&'static str> {
    VISIT_COUNTRIES.to_vec()
}

/// Countries selectable for the given category, with the free-text entry
/// last. Nothing is selectable until a category is chosen.
pub fn destination_options(visa_type: Option<VisaType>) -> Vec<DestinationOption> {
    let countries = match visa_type {
        Some(VisaType::Study) => study_countries(),
        Some(VisaType::Visit) => visit_countries(),
        None => return Vec::new(),
    };
    countries
        .into_iter()
        .map(DestinationOption::Listed)
        .chain(std::iter::once(DestinationOption::Other))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_unique_drops_repeats() {
        let merged = ["UK", "Canada", "Malaysia", "Canada", "Australia", "UK"];
        assert_eq!(sorted_unique(&merged), vec!["Australia", "Canada", "Malaysia", "UK"]);
    }

    #[test]
    fn test_study_countries_are_sorted_and_unique() {
        let countries = study_countries();
        assert!(countries.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(countries.first(), Some(&"Australia"));
        assert!(STUDY_COUNTRIES.iter().all(|c| countries.contains(c)));
    }

    #[test]
    fn test_visit_countries_keep_fixture_order() {
        let options = destination_options(Some(VisaType::Visit));
        assert_eq!(options.first(), Some(&DestinationOption::Listed("Thailand")));
        assert_eq!(options.len(), VISIT_COUNTRIES.len() + 1);
    }

    #[test]
    fn test_other_option_comes_last() {
        let options = destination_options(Some(VisaType::Study));
        assert_eq!(options.last(), Some(&DestinationOption::Other));
        assert_eq!(options.last().map(|o| o.value()), Some(OTHER_COUNTRY));
    }

    #[test]
    fn test_no_category_has_no_options() {
        assert!(destination_options(None).is_empty());
    }
}
