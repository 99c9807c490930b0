//! Cards, their penalties, and the deck.
//!
//! A card is nothing but its face value. Everything the rules need from a
//! card (its ordering and its penalty) is derived from that value.

mod card;
mod deck;

pub use card::{card_penalty, row_penalty, Card};
pub use deck::Deck;
