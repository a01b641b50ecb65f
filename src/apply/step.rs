use crate::apply::draft::ApplicationDraft;
use crate::apply::validation::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    SelectCategory,
    CollectDetails,
}

impl Step {
    pub fn next(self, draft: &ApplicationDraft) -> Result<Step, ValidationError> {
        match self {
            Step::SelectCategory if draft.visa_type.is_none() => Err(ValidationError::MissingVisaType),
            Step::SelectCategory | Step::CollectDetails => Ok(Step::CollectDetails),
        }
    }

    pub fn back(self) -> Step {
        Step::SelectCategory
    }

    pub fn number(self) -> u8 {
        match self {
            Step::SelectCategory => 1,
            Step::CollectDetails => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::draft::VisaType;

    #[test]
    fn test_cannot_advance_without_visa_type() {
        let draft = ApplicationDraft::default();
        assert_eq!(Step::SelectCategory.next(&draft), Err(ValidationError::MissingVisaType));
    }

    #[test]
    fn test_advance_and_back() {
        let mut draft = ApplicationDraft::default();
        draft.select_visa_type(Some(VisaType::Visit));
        let step = Step::SelectCategory.next(&draft).unwrap();
        assert_eq!(step, Step::CollectDetails);
        assert_eq!(step.back(), Step::SelectCategory);
        assert_eq!(Step::default(), Step::SelectCategory);
    }
}
