use std::{
    fs,
    path::Path,
};

use crate::core::{
    models::{
        Card,
        Deck,
    },
    utils::{
        deck_title,
        slugify,
    },
    DeckError,
};

pub mod json;

/// Wraps the converted cards with deck-level metadata derived from the
/// archive's filename stem.
pub fn build_deck(file_stem: &str, cards: Vec<Card>) -> Deck {
    Deck { id: slugify(file_stem), title: deck_title(file_stem), cards }
}

/// Writes the deck as ASCII-only indented JSON, creating parent directories
/// as needed. Plain overwrite; the deck is always fully rewritten.
pub fn write_deck(deck: &Deck, output: &Path) -> Result<(), DeckError> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = json::to_ascii_pretty(deck)?;
    fs::write(output, bytes)?;

    Ok(())
}
