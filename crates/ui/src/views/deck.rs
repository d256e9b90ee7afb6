mod deck;
mod scripts;

pub use deck::DeckView;
