use std::path::{
    Path,
    PathBuf,
};

use tempfile::TempDir;

use crate::{
    apkg::{
        fields::FieldCleaner,
        media::MediaExtractor,
        notes,
        ApkgFile,
    },
    core::{
        DeckError,
        FieldSchema,
    },
    deck,
};

pub struct ConvertOptions {
    pub apkg: PathBuf,
    pub output: PathBuf,
    pub media_dir: PathBuf,
    pub audio: bool,
}

pub struct ConvertReport {
    pub cards: usize,
    pub output: PathBuf,
}

/// Runs the full conversion: open the archive, read every note, clean its
/// fields, resolve audio, and write the deck JSON. The extracted collection
/// lives in a scratch dir that is removed on every exit path.
pub fn convert(options: &ConvertOptions) -> Result<ConvertReport, DeckError> {
    let scratch = TempDir::new()?;
    let mut apkg = ApkgFile::open(&options.apkg, scratch.path())?;
    let note_rows = notes::read_notes(apkg.collection_path())?;

    let cleaner = FieldCleaner::new();
    let schema = FieldSchema::default();
    let extractor = MediaExtractor::new(options.media_dir.clone(), options.audio);

    let mut cards = Vec::new();
    for note in note_rows {
        let note_fields = cleaner.split_note(&note.fields);
        let text = schema.project(&note_fields.values);
        if text.is_empty() {
            continue; // nothing to show, and no media side effects either
        }

        let audio_url = extractor.extract(&mut apkg, &note_fields.sounds)?;
        cards.push(text.into_card(note.id, audio_url));
    }

    let deck = deck::build_deck(&file_stem(&options.apkg), cards);
    deck::write_deck(&deck, &options.output)?;

    Ok(ConvertReport { cards: deck.cards.len(), output: options.output.clone() })
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("deck").to_string()
}
