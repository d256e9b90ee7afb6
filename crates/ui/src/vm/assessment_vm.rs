use deck_core::assessment::{AnswerSheet, ContactInfo};
use services::Evaluation;

/// Transient toast message, keyed so a scheduled clear for an older notice
/// never wipes a newer one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    key: u32,
    message: String,
}

impl Notice {
    /// Builds the notice that replaces `previous`, bumping the key.
    #[must_use]
    pub fn replacing(previous: Option<&Notice>, message: String) -> Self {
        Self {
            key: previous.map_or(0, |n| n.key.wrapping_add(1)),
            message,
        }
    }

    #[must_use]
    pub fn key(&self) -> u32 {
        self.key
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a clear scheduled with `key` still applies to this notice.
    /// A stale clear (older key) is ignored.
    #[must_use]
    pub fn clears_with(&self, key: u32) -> bool {
        self.key == key
    }
}

/// Assessment form state machine: a valid, complete submission moves to
/// `ResultsShown`; reset moves back. Invalid submissions stay `Unanswered`
/// with the inputs preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentPhase {
    Unanswered,
    ResultsShown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentVm {
    sheet: AnswerSheet,
    contact: ContactInfo,
    phase: AssessmentPhase,
    result: Option<Evaluation>,
    submitting: bool,
}

impl Default for AssessmentVm {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sheet: AnswerSheet::new(),
            contact: ContactInfo::default(),
            phase: AssessmentPhase::Unanswered,
            result: None,
            submitting: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    #[must_use]
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    #[must_use]
    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    #[must_use]
    pub fn result(&self) -> Option<&Evaluation> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn selection(&self, key: &str) -> Option<u8> {
        self.sheet.selection(key)
    }

    /// Records an answer. The form only offers defined options, so an
    /// invalid pair is silently ignored.
    pub fn select(&mut self, key: &str, value: u8) {
        let _ = self.sheet.select(key, value);
    }

    pub fn set_name(&mut self, value: String) {
        self.contact.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.contact.email = value;
    }

    pub fn set_company(&mut self, value: String) {
        self.contact.company = value;
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn show_results(&mut self, evaluation: Evaluation) {
        self.result = Some(evaluation);
        self.phase = AssessmentPhase::ResultsShown;
        self.submitting = false;
    }

    /// Clears answers, contact fields and any displayed result.
    pub fn reset(&mut self) {
        self.sheet.clear();
        self.contact.clear();
        self.result = None;
        self.phase = AssessmentPhase::Unanswered;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::assessment::{QUESTIONS, Score, classify, score};

    fn answered() -> AssessmentVm {
        let mut vm = AssessmentVm::new();
        for q in &QUESTIONS {
            vm.select(q.key, 2);
        }
        vm
    }

    #[test]
    fn starts_unanswered_and_incomplete() {
        let vm = AssessmentVm::new();
        assert_eq!(vm.phase(), AssessmentPhase::Unanswered);
        assert_eq!(score(vm.sheet()), Score::Incomplete);
        assert!(vm.result().is_none());
    }

    #[test]
    fn invalid_selection_is_ignored() {
        let mut vm = AssessmentVm::new();
        vm.select("ota", 9);
        assert_eq!(vm.selection("ota"), None);
    }

    #[test]
    fn show_results_moves_to_results_shown() {
        let mut vm = answered();
        let level = classify(10).unwrap();
        vm.set_submitting(true);
        vm.show_results(Evaluation { total: 10, level });
        assert_eq!(vm.phase(), AssessmentPhase::ResultsShown);
        assert!(!vm.is_submitting());
        assert_eq!(vm.result().unwrap().total, 10);
    }

    #[test]
    fn a_newer_notice_bumps_the_key() {
        let first = Notice::replacing(None, "one".to_string());
        let second = Notice::replacing(Some(&first), "two".to_string());
        assert_eq!(first.key(), 0);
        assert_eq!(second.key(), 1);
        assert_eq!(second.message(), "two");
    }

    #[test]
    fn a_stale_clear_does_not_apply_to_a_newer_notice() {
        let first = Notice::replacing(None, "one".to_string());
        let second = Notice::replacing(Some(&first), "two".to_string());
        assert!(!second.clears_with(first.key()));
        assert!(second.clears_with(second.key()));
    }

    #[test]
    fn reset_clears_everything() {
        let mut vm = answered();
        vm.set_name("Sam".to_string());
        vm.set_email("sam@example.com".to_string());
        vm.set_company("Example Motors".to_string());
        let level = classify(10).unwrap();
        vm.show_results(Evaluation { total: 10, level });

        vm.reset();

        assert_eq!(vm.phase(), AssessmentPhase::Unanswered);
        assert_eq!(score(vm.sheet()), Score::Incomplete);
        assert!(vm.contact().name.is_empty());
        assert!(vm.contact().email.is_empty());
        assert!(vm.result().is_none());
    }
}
