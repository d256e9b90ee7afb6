//! The readiness self-assessment: fixed question set, additive scoring, and
//! the tier table that maps a total score to a recommendation.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("unknown question: {key}")]
    UnknownQuestion { key: String },

    #[error("value {value} is not an option for question {key}")]
    InvalidValue { key: String, value: u8 },
}

/// Contact-field validation failure, surfaced as a user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactError {
    #[error("please fill in your {field}")]
    EmptyField { field: &'static str },

    #[error("that email address doesn't look right")]
    InvalidEmail,
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: [QuestionOption; 3],
}

const fn option(value: u8, label: &'static str) -> QuestionOption {
    QuestionOption { value, label }
}

/// The fixed question set, in presentation order.
pub const QUESTIONS: [Question; 5] = [
    Question {
        key: "architecture",
        prompt: "How is your vehicle software architecture organised today?",
        options: [
            option(1, "Distributed ECUs, one per function"),
            option(2, "Partially consolidated domain controllers"),
            option(3, "Centralised or zonal compute"),
        ],
    },
    Question {
        key: "ota",
        prompt: "Can you update vehicle software in the field?",
        options: [
            option(1, "No, changes require a workshop visit"),
            option(2, "Over-the-air for selected ECUs"),
            option(3, "Full-vehicle over-the-air updates"),
        ],
    },
    Question {
        key: "team",
        prompt: "Where does your vehicle software get written?",
        options: [
            option(1, "Mostly at suppliers"),
            option(2, "Mixed supplier and in-house teams"),
            option(3, "A strong in-house platform team"),
        ],
    },
    Question {
        key: "process",
        prompt: "How often do you release vehicle software?",
        options: [
            option(1, "Once per vehicle program"),
            option(2, "Yearly model-year updates"),
            option(3, "Continuous integration with frequent releases"),
        ],
    },
    Question {
        key: "data",
        prompt: "What happens to data from vehicles in the field?",
        options: [
            option(1, "It stays in the vehicle"),
            option(2, "Diagnostics are read out on demand"),
            option(3, "Fleet-wide telemetry feeds development"),
        ],
    },
];

fn question(key: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.key == key)
}

//
// ─── ANSWERS & SCORING ─────────────────────────────────────────────────────────
//

/// Selected option values, keyed by question. Starts empty; cleared on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selected: BTreeMap<&'static str, u8>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected option for a question, replacing any previous
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` when the question or option does not exist.
    pub fn select(&mut self, key: &str, value: u8) -> Result<(), AnswerError> {
        let Some(question) = question(key) else {
            return Err(AnswerError::UnknownQuestion {
                key: key.to_string(),
            });
        };
        if !question.options.iter().any(|opt| opt.value == value) {
            return Err(AnswerError::InvalidValue {
                key: key.to_string(),
                value,
            });
        }
        self.selected.insert(question.key, value);
        Ok(())
    }

    #[must_use]
    pub fn selection(&self, key: &str) -> Option<u8> {
        self.selected.get(key).copied()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.selected.contains_key(q.key))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Result of scoring an answer sheet. `Incomplete` is an expected state of
/// user input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Incomplete,
    Complete(u32),
}

/// Highest total a complete answer sheet can reach: the sum of each
/// question's largest option value.
#[must_use]
pub fn max_score() -> u32 {
    QUESTIONS
        .iter()
        .map(|q| q.options.iter().map(|opt| u32::from(opt.value)).max().unwrap_or(0))
        .sum()
}

/// Sums the selected option values iff every question has an answer.
#[must_use]
pub fn score(sheet: &AnswerSheet) -> Score {
    if !sheet.is_complete() {
        return Score::Incomplete;
    }
    let total = QUESTIONS
        .iter()
        .filter_map(|q| sheet.selection(q.key))
        .map(u32::from)
        .sum();
    Score::Complete(total)
}

//
// ─── READINESS TIERS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessLevel {
    pub tier: ReadinessTier,
    pub range: RangeInclusive<u32>,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

/// The tier table. Ranges partition the achievable score range with no gaps
/// or overlaps.
#[must_use]
pub fn readiness_levels() -> [ReadinessLevel; 3] {
    [
        ReadinessLevel {
            tier: ReadinessTier::Low,
            range: 0..=6,
            title: "Early Stage",
            description: "Your program still runs on a traditional ECU model. \
                          The good news: you have the most to gain.",
            recommendations: &[
                "Start with a two-week architecture audit",
                "Pick one domain as an OTA pilot",
                "Build a small in-house platform team around the pilot",
            ],
        },
        ReadinessLevel {
            tier: ReadinessTier::Medium,
            range: 7..=12,
            title: "Transitioning",
            description: "You have parts of the SDV picture in place and are \
                          ready to consolidate.",
            recommendations: &[
                "Consolidate domains onto central compute",
                "Extend OTA coverage to the full vehicle",
                "Move releases onto a continuous integration cadence",
            ],
        },
        ReadinessLevel {
            tier: ReadinessTier::High,
            range: 13..=15,
            title: "SDV Ready",
            description: "Your platform fundamentals are strong. The next wins \
                          come from speed and the data loop.",
            recommendations: &[
                "Close the loop from fleet telemetry to the backlog",
                "Shorten release cycles with virtual targets in CI",
                "Productise the platform across vehicle lines",
            ],
        },
    ]
}

/// Looks up the unique level whose range contains `total`.
///
/// Returns `None` ("unclassified") only if the partition were broken; the
/// built-in table covers every achievable score.
#[must_use]
pub fn classify(total: u32) -> Option<ReadinessLevel> {
    readiness_levels()
        .into_iter()
        .find(|level| level.range.contains(&total))
}

//
// ─── CONTACT VALIDATION ────────────────────────────────────────────────────────
//

/// Free-text contact fields collected alongside the assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl ContactInfo {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.company.clear();
    }
}

/// All fields must be non-empty after trimming; the email must look like
/// `local@domain.tld`.
///
/// # Errors
///
/// Returns the first failing field as a `ContactError`.
pub fn validate_contact(contact: &ContactInfo) -> Result<(), ContactError> {
    for (field, value) in [
        ("name", &contact.name),
        ("email", &contact.email),
        ("company", &contact.company),
    ] {
        if value.trim().is_empty() {
            return Err(ContactError::EmptyField { field });
        }
    }
    if !email_looks_valid(contact.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// Deliberately simple shape check: one `@`, non-empty local part, a dot
/// somewhere after the first character of the domain, no whitespace.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
