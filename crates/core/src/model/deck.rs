use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SlideIndex;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    Empty,

    #[error("slide title cannot be empty")]
    EmptyTitle,
}

//
// ─── SLIDE CONTENT ─────────────────────────────────────────────────────────────
//

/// A headed card shown in a grid on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    pub heading: String,
    pub detail: String,
}

/// A numeric statistic rendered with a count-up animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: u32,
    /// Appended after the number, e.g. `"%"` or `"+"`.
    pub suffix: String,
    pub label: String,
}

/// One labelled row in a feature comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub period: String,
    pub milestone: String,
}

/// Body of a slide. The variant decides the layout and which entrance
/// animation targets exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideBody {
    Title {
        tagline: String,
        specialization: String,
    },
    Cards(Vec<CardItem>),
    Stats(Vec<StatItem>),
    Features(Vec<FeatureRow>),
    Roadmap(Vec<RoadmapPhase>),
    CallToAction {
        pitch: String,
        button_label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    title: String,
    subtitle: Option<String>,
    body: SlideBody,
}

impl Slide {
    /// # Errors
    ///
    /// Returns `DeckError::EmptyTitle` when the title is blank.
    pub fn new(
        title: impl Into<String>,
        subtitle: Option<String>,
        body: SlideBody,
    ) -> Result<Self, DeckError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DeckError::EmptyTitle);
        }
        Ok(Self {
            title,
            subtitle,
            body,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &SlideBody {
        &self.body
    }
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A fixed, ordered sequence of slides. Built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// # Errors
    ///
    /// Returns `DeckError::Empty` when no slides are given.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.slides.len()).unwrap_or(u32::MAX)
    }

    /// Looks up a slide by its 1-based index.
    #[must_use]
    pub fn slide(&self, index: SlideIndex) -> Option<&Slide> {
        self.slides.get(index.value() as usize - 1)
    }

    /// Iterate slides together with their 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (SlideIndex, &Slide)> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| (SlideIndex::new(i as u32 + 1), slide))
    }

    /// The built-in software-defined-vehicle consulting pitch.
    ///
    /// # Panics
    ///
    /// Never panics; every slide below has a non-empty title.
    #[must_use]
    pub fn sdv_pitch() -> Self {
        let cards = |items: &[(&str, &str)]| {
            SlideBody::Cards(
                items
                    .iter()
                    .map(|(heading, detail)| CardItem {
                        heading: (*heading).to_string(),
                        detail: (*detail).to_string(),
                    })
                    .collect(),
            )
        };

        let slides = vec![
            Slide::new(
                "Velocity Embedded",
                None,
                SlideBody::Title {
                    tagline: "Vehicle software, shipped like software".to_string(),
                    specialization: "Software-Defined Vehicle Engineering".to_string(),
                },
            ),
            Slide::new(
                "The Problem",
                Some("Why vehicle programs slip".to_string()),
                cards(&[
                    (
                        "Fragmented ECUs",
                        "Dozens of suppliers, dozens of toolchains, one integration bottleneck.",
                    ),
                    (
                        "Multi-year cycles",
                        "Features are frozen years before the first customer touches them.",
                    ),
                    (
                        "No update path",
                        "Bugs found in the field mean recalls, not patches.",
                    ),
                ]),
            ),
            Slide::new(
                "Our Expertise",
                None,
                SlideBody::Stats(vec![
                    StatItem {
                        value: 14,
                        suffix: String::new(),
                        label: "years in embedded automotive".to_string(),
                    },
                    StatItem {
                        value: 40,
                        suffix: "+".to_string(),
                        label: "production ECU programs".to_string(),
                    },
                    StatItem {
                        value: 95,
                        suffix: "%".to_string(),
                        label: "first-pass homologation rate".to_string(),
                    },
                ]),
            ),
            Slide::new(
                "Engagement Tiers",
                None,
                cards(&[
                    ("Assess", "Two-week architecture and process audit."),
                    ("Build", "Embedded platform team working inside your program."),
                    ("Transform", "Full SDV migration with training and handover."),
                ]),
            ),
            Slide::new(
                "What You Get",
                None,
                cards(&[
                    ("Faster releases", "From yearly drops to monthly over-the-air updates."),
                    ("One platform", "Consolidated compute instead of supplier silos."),
                    ("In-house skills", "Your engineers own the stack when we leave."),
                ]),
            ),
            Slide::new(
                "The SDV Platform",
                Some("What software-defined actually means".to_string()),
                SlideBody::Features(vec![
                    FeatureRow {
                        name: "Zonal architecture".to_string(),
                        description: "Central compute with thin zone controllers.".to_string(),
                    },
                    FeatureRow {
                        name: "OTA pipeline".to_string(),
                        description: "Signed, staged, fleet-wide updates.".to_string(),
                    },
                    FeatureRow {
                        name: "Virtual targets".to_string(),
                        description: "CI runs the vehicle software before hardware exists."
                            .to_string(),
                    },
                    FeatureRow {
                        name: "Data loop".to_string(),
                        description: "Telemetry feeds the next release, not a shelf.".to_string(),
                    },
                ]),
            ),
            Slide::new(
                "Proven Results",
                None,
                SlideBody::Stats(vec![
                    StatItem {
                        value: 60,
                        suffix: "%".to_string(),
                        label: "shorter integration cycles".to_string(),
                    },
                    StatItem {
                        value: 8,
                        suffix: "x".to_string(),
                        label: "more releases per year".to_string(),
                    },
                    StatItem {
                        value: 30,
                        suffix: "%".to_string(),
                        label: "lower per-vehicle software cost".to_string(),
                    },
                ]),
            ),
            Slide::new(
                "Roadmap",
                Some("A typical transformation".to_string()),
                SlideBody::Roadmap(vec![
                    RoadmapPhase {
                        period: "Months 1-2".to_string(),
                        milestone: "Architecture audit and target platform selection".to_string(),
                    },
                    RoadmapPhase {
                        period: "Months 3-8".to_string(),
                        milestone: "Platform bring-up, CI, first OTA-capable domain".to_string(),
                    },
                    RoadmapPhase {
                        period: "Months 9-18".to_string(),
                        milestone: "Domain consolidation and fleet telemetry".to_string(),
                    },
                    RoadmapPhase {
                        period: "Month 18+".to_string(),
                        milestone: "Continuous delivery owned by your team".to_string(),
                    },
                ]),
            ),
            Slide::new(
                "Why Us",
                None,
                cards(&[
                    ("Automotive natives", "We have shipped through ASPICE and ISO 26262."),
                    ("Software natives", "We brought CI/CD to ECU programs before it was expected."),
                    ("No lock-in", "Everything we build is yours, documented and handed over."),
                ]),
            ),
            Slide::new(
                "Let's Talk",
                Some("Find out where you stand".to_string()),
                SlideBody::CallToAction {
                    pitch: "Take the two-minute readiness assessment and get a tailored \
                            recommendation for your program."
                        .to_string(),
                    button_label: "Request a Consultation".to_string(),
                },
            ),
        ];

        let slides: Vec<Slide> = slides
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("built-in slides are valid");
        Self { slides }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
