use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use deck_core::assessment::{
    AnswerSheet, ContactError, ContactInfo, ReadinessLevel, Score, classify, score,
    validate_contact,
};

/// Why a submission was turned away. This is expected user-input state, not
/// a fault: the form stays as entered and the message is shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitRejection {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("please answer every question before submitting")]
    Incomplete,

    #[error("score {0} is outside the readiness table")]
    Unclassified(u32),
}

/// A scored, classified submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub total: u32,
    pub level: ReadinessLevel,
}

/// Validates and scores assessment submissions.
///
/// Scoring itself is instant; the short `processing` pause stands in for the
/// submission round-trip the original experience had, so the UI gets a
/// believable "working" state.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentService {
    processing: Duration,
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(800),
        }
    }
}

impl AssessmentService {
    #[must_use]
    pub fn with_processing(mut self, processing: Duration) -> Self {
        self.processing = processing;
        self
    }

    /// # Errors
    ///
    /// Returns a [`SubmitRejection`] when contact fields fail validation or
    /// any question is unanswered; the inputs are left untouched for
    /// correction.
    pub async fn submit(
        &self,
        sheet: &AnswerSheet,
        contact: &ContactInfo,
    ) -> Result<Evaluation, SubmitRejection> {
        validate_contact(contact).inspect_err(|err| {
            debug!(%err, "submission rejected: contact");
        })?;
        let total = match score(sheet) {
            Score::Complete(total) => total,
            Score::Incomplete => {
                debug!("submission rejected: unanswered questions");
                return Err(SubmitRejection::Incomplete);
            }
        };

        tokio::time::sleep(self.processing).await;

        let level = classify(total).ok_or(SubmitRejection::Unclassified(total))?;
        info!(total, title = level.title, "assessment scored");
        Ok(Evaluation { total, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::assessment::{QUESTIONS, ReadinessTier};

    fn instant() -> AssessmentService {
        AssessmentService::default().with_processing(Duration::ZERO)
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Sam Doe".to_string(),
            email: "sam@example.com".to_string(),
            company: "Example Motors".to_string(),
        }
    }

    fn sheet(value: u8) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for q in &QUESTIONS {
            sheet.select(q.key, value).unwrap();
        }
        sheet
    }

    #[tokio::test]
    async fn complete_submission_is_scored_and_classified() {
        let evaluation = instant().submit(&sheet(3), &contact()).await.unwrap();
        assert_eq!(evaluation.total, 15);
        assert_eq!(evaluation.level.tier, ReadinessTier::High);
    }

    #[tokio::test]
    async fn unanswered_questions_are_rejected() {
        let result = instant().submit(&AnswerSheet::new(), &contact()).await;
        assert_eq!(result, Err(SubmitRejection::Incomplete));
    }

    #[tokio::test]
    async fn bad_email_is_rejected_before_scoring() {
        let mut bad = contact();
        bad.email = "sam@example".to_string();
        let result = instant().submit(&sheet(2), &bad).await;
        assert_eq!(
            result,
            Err(SubmitRejection::Contact(ContactError::InvalidEmail))
        );
    }
}
