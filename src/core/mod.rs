pub mod errors;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use errors::DeckError;
pub use models::{ Card, CardText, Deck, FieldSchema };
