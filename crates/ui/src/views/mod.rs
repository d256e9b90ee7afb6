mod assessment;
mod deck;

pub use assessment::AssessmentPanel;
pub use deck::DeckView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
