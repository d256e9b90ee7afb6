mod deck;
mod ids;

pub use deck::{
    CardItem, Deck, DeckError, FeatureRow, RoadmapPhase, Slide, SlideBody, StatItem,
};
pub use ids::{ParseSlideIndexError, SlideIndex};
