use gloo_net::http::Request;
use log::{info, warn};

use crate::apply::validation::ApplicationPayload;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Rejected { status: u16 },
    NetworkFailure { reason: String },
}

impl SubmissionOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmissionOutcome::Success
        } else {
            SubmissionOutcome::Rejected { status }
        }
    }
}

/// Posts the application once. The response body is never read.
pub async fn send_application(payload: &ApplicationPayload) -> SubmissionOutcome {
    let url = config::application_submit_url();
    info!("Submitting {} application to {}", payload.visa_type.as_str(), url);

    let request = match Request::post(&url).json(payload) {
        Ok(req) => req,
        Err(e) => {
            warn!("Could not build application request: {}", e);
            return SubmissionOutcome::NetworkFailure { reason: e.to_string() };
        }
    };

    match request.send().await {
        Ok(response) => {
            let outcome = SubmissionOutcome::from_status(response.status());
            if let SubmissionOutcome::Rejected { status } = outcome {
                warn!("Application rejected with status: {}", status);
            } else {
                info!("Application accepted");
            }
            outcome
        }
        Err(e) => {
            warn!("Network error: {}", e);
            SubmissionOutcome::NetworkFailure { reason: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(SubmissionOutcome::from_status(200), SubmissionOutcome::Success);
        assert_eq!(SubmissionOutcome::from_status(201), SubmissionOutcome::Success);
        assert_eq!(
            SubmissionOutcome::from_status(422),
            SubmissionOutcome::Rejected { status: 422 }
        );
        assert_eq!(
            SubmissionOutcome::from_status(302),
            SubmissionOutcome::Rejected { status: 302 }
        );
    }
}
