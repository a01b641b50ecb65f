use log::debug;
use thiserror::Error;

use crate::apply::draft::ApplicationDraft;
use crate::apply::step::Step;
use crate::apply::submit::SubmissionOutcome;
use crate::apply::validation::{self, ApplicationPayload, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Your application is already being submitted")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Something the user should be told about, rendered as a toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn for_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success => {
                Notice::success("Application submitted successfully! We'll contact you soon.")
            }
            SubmissionOutcome::Rejected { .. } => {
                Notice::error("Something went wrong. Please try again.")
            }
            SubmissionOutcome::NetworkFailure { .. } => {
                Notice::error("Network error. Check your connection and try again.")
            }
        }
    }
}

/// What the form component has to do after a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Settled {
    pub notice: Notice,
    pub close_form: bool,
}

/// State of the application form: the draft, the step it is on, and whether
/// a submission is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormController {
    pub draft: ApplicationDraft,
    pub step: Step,
    pub busy: bool,
}

impl FormController {
    pub fn next_step(&mut self) -> Result<(), ValidationError> {
        let next = self.step.next(&self.draft).map_err(|e| {
            debug!("Refusing to leave step {}: {}", self.step.number(), e);
            e
        })?;
        self.step = next;
        Ok(())
    }

    pub fn previous_step(&mut self) {
        self.step = self.step.back();
    }

    /// Validates the draft and marks the form busy. The caller sends the
    /// returned payload and reports back through `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<ApplicationPayload, SubmitBlocked> {
        if self.busy {
            return Err(SubmitBlocked::Busy);
        }
        let payload = validation::validate(&self.draft).map_err(|e| {
            debug!("Application not sent: {}", e);
            e
        })?;
        self.busy = true;
        Ok(payload)
    }

    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) -> Settled {
        self.busy = false;
        let close_form = *outcome == SubmissionOutcome::Success;
        if close_form {
            self.reset();
        }
        Settled { notice: Notice::for_outcome(outcome), close_form }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::destinations::OTHER_COUNTRY;
    use crate::apply::draft::{DegreeLevel, TextField, Urgency, VisaType};

    fn filled() -> FormController {
        let mut form = FormController::default();
        form.draft.select_visa_type(Some(VisaType::Study));
        form.next_step().unwrap();
        form.draft.set_text(TextField::Name, "Ali Khan".to_string());
        form.draft.set_text(TextField::Email, "ali@example.com".to_string());
        form.draft.set_text(TextField::Phone, "+923001234567".to_string());
        form.draft.set_text(TextField::Address, "Main St, Lahore".to_string());
        form.draft.select_country("France".to_string());
        form.draft.urgency = Some(Urgency::Within3Months);
        form.draft.degree_level = Some(DegreeLevel::Bachelor);
        form
    }

    #[test]
    fn test_next_step_without_category_stays_put() {
        let mut form = FormController::default();
        assert_eq!(form.next_step(), Err(ValidationError::MissingVisaType));
        assert_eq!(form.step, Step::SelectCategory);
    }

    #[test]
    fn test_back_keeps_entered_values() {
        let mut form = filled();
        form.previous_step();
        assert_eq!(form.step, Step::SelectCategory);
        assert_eq!(form.draft.name, "Ali Khan");
        assert_eq!(form.draft.desired_country, "France");
    }

    #[test]
    fn test_invalid_draft_is_not_sent() {
        let mut form = filled();
        form.draft.set_text(TextField::Phone, String::new());
        let before = form.clone();
        assert!(matches!(form.begin_submit(), Err(SubmitBlocked::Invalid(_))));
        assert_eq!(form, before);
        assert!(!form.busy);
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert!(form.busy);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_success_resets_and_closes() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let settled = form.finish_submit(&SubmissionOutcome::Success);
        assert!(settled.close_form);
        assert_eq!(settled.notice.level, NoticeLevel::Success);
        assert_eq!(form, FormController::default());
        assert_eq!(form.step, Step::SelectCategory);
    }

    #[test]
    fn test_rejection_keeps_values_and_clears_busy() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let draft = form.draft.clone();
        let settled = form.finish_submit(&SubmissionOutcome::Rejected { status: 500 });
        assert!(!settled.close_form);
        assert_eq!(settled.notice.level, NoticeLevel::Error);
        assert!(!form.busy);
        assert_eq!(form.draft, draft);
        assert_eq!(form.step, Step::CollectDetails);
    }

    #[test]
    fn test_network_failure_keeps_values_and_clears_busy() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let draft = form.draft.clone();
        let settled = form.finish_submit(&SubmissionOutcome::NetworkFailure {
            reason: "offline".to_string(),
        });
        assert!(!settled.close_form);
        assert_eq!(
            settled.notice.message,
            "Network error. Check your connection and try again."
        );
        assert!(!form.busy);
        assert_eq!(form.draft, draft);
    }

    #[test]
    fn test_typed_destination_reaches_payload() {
        let mut form = filled();
        form.draft.select_country(OTHER_COUNTRY.to_string());
        form.draft.set_text(TextField::OtherCountry, "Japan".to_string());
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.desired_country, "Japan");
    }
}
