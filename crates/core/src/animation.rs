//! Entrance animation recipes, keyed by slide index.
//!
//! Pure presentation data: a recipe names the elements a slide reveals and
//! how they move in, and the renderer staggers them by `step` per element.
//! No business logic depends on anything here.

use std::time::Duration;

use crate::model::SlideIndex;

/// How an element enters the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fade in while translating up from `offset_px` below.
    RiseIn { offset_px: u32 },
    /// Fade in while translating right from `offset_px` to the left.
    SlideInLeft { offset_px: u32 },
    /// Fade in while translating left from `offset_px` to the right.
    SlideInRight { offset_px: u32 },
    /// Fade in while scaling up from `from_percent` of full size.
    ScaleIn { from_percent: u32 },
    /// Animate a numeric stat from zero to its final value.
    CountUp,
}

/// Staggered reveal of one group of elements on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// CSS class of the animated children inside the slide container.
    pub target: &'static str,
    pub effect: Effect,
    /// Delay added per element: element `i` starts at `i * step`.
    pub step: Duration,
    pub duration: Duration,
}

impl Recipe {
    /// Start delay for the element at `position` within the group.
    #[must_use]
    pub fn delay_for(&self, position: usize) -> Duration {
        self.step.saturating_mul(u32::try_from(position).unwrap_or(u32::MAX))
    }
}

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Recipe for the given slide of the built-in deck.
///
/// Indices past the deck map to `None`, which the renderer treats as "no
/// entrance animation" rather than an error.
#[must_use]
pub fn recipe_for(slide: SlideIndex) -> Option<Recipe> {
    let recipe = match slide.value() {
        1 => Recipe {
            target: "title-line",
            effect: Effect::RiseIn { offset_px: 30 },
            step: ms(200),
            duration: ms(600),
        },
        2 => Recipe {
            target: "problem-card",
            effect: Effect::RiseIn { offset_px: 40 },
            step: ms(150),
            duration: ms(500),
        },
        3 => Recipe {
            target: "stat",
            effect: Effect::CountUp,
            step: ms(200),
            duration: ms(600),
        },
        4 => Recipe {
            target: "tier-card",
            effect: Effect::ScaleIn { from_percent: 80 },
            step: ms(200),
            duration: ms(600),
        },
        5 => Recipe {
            target: "benefit-card",
            effect: Effect::SlideInLeft { offset_px: 50 },
            step: ms(150),
            duration: ms(500),
        },
        6 => Recipe {
            target: "feature-row",
            effect: Effect::SlideInLeft { offset_px: 60 },
            step: ms(200),
            duration: ms(600),
        },
        7 => Recipe {
            target: "stat",
            effect: Effect::ScaleIn { from_percent: 90 },
            step: ms(150),
            duration: ms(500),
        },
        8 => Recipe {
            target: "roadmap-phase",
            effect: Effect::RiseIn { offset_px: 40 },
            step: ms(200),
            duration: ms(600),
        },
        9 => Recipe {
            target: "value-card",
            effect: Effect::RiseIn { offset_px: 50 },
            step: ms(200),
            duration: ms(600),
        },
        10 => Recipe {
            target: "cta-block",
            effect: Effect::SlideInRight { offset_px: 40 },
            step: ms(300),
            duration: ms(600),
        },
        _ => return None,
    };
    Some(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deck;

    #[test]
    fn every_slide_of_the_pitch_has_a_recipe() {
        let deck = Deck::sdv_pitch();
        for (index, _) in deck.iter() {
            assert!(recipe_for(index).is_some(), "no recipe for slide {index}");
        }
    }

    #[test]
    fn indices_past_the_deck_have_none() {
        assert!(recipe_for(SlideIndex::new(11)).is_none());
    }

    #[test]
    fn delays_stagger_by_step() {
        let recipe = recipe_for(SlideIndex::new(2)).unwrap();
        assert_eq!(recipe.delay_for(0), Duration::ZERO);
        assert_eq!(recipe.delay_for(3), Duration::from_millis(450));
    }

    #[test]
    fn stats_slides_count_up() {
        let recipe = recipe_for(SlideIndex::new(3)).unwrap();
        assert_eq!(recipe.effect, Effect::CountUp);
        assert_eq!(recipe.target, "stat");
    }
}
