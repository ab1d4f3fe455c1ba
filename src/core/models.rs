#[derive(Debug, Clone, serde::Serialize)]
pub struct Card {
    pub id: String,
    pub note_id: String,
    pub de_word: String,
    pub de_sentence: String,
    pub en_word: String,
    pub en_sentence: String,
    pub audio_url: Option<String>, // None serializes as null
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Deck {
    pub id: String,    // slug derived from the apkg filename
    pub title: String, // apkg filename with underscores as spaces
    pub cards: Vec<Card>,
}

/// Positional field indices for the fixed word/sentence note type.
/// Index 0 holds the source format's scheduling metadata and is skipped.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldSchema {
    pub de_word: usize,
    pub de_sentence: usize,
    pub en_word: usize,
    pub en_sentence: usize,
}

impl Default for FieldSchema {
    fn default() -> Self {
        FieldSchema { de_word: 1, de_sentence: 2, en_word: 3, en_sentence: 4 }
    }
}

impl FieldSchema {
    /// Maps cleaned note fields onto the card text slots. Indices past the
    /// end of the field list resolve to the empty string.
    pub fn project(&self, values: &[String]) -> CardText {
        let pick = |index: usize| values.get(index).cloned().unwrap_or_default();

        CardText {
            de_word: pick(self.de_word),
            de_sentence: pick(self.de_sentence),
            en_word: pick(self.en_word),
            en_sentence: pick(self.en_sentence),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardText {
    pub de_word: String,
    pub de_sentence: String,
    pub en_word: String,
    pub en_sentence: String,
}

impl CardText {
    pub fn is_empty(&self) -> bool {
        self.de_word.is_empty()
            && self.de_sentence.is_empty()
            && self.en_word.is_empty()
            && self.en_sentence.is_empty()
    }

    pub fn into_card(self, note_id: i64, audio_url: Option<String>) -> Card {
        Card {
            id: note_id.to_string(),
            note_id: note_id.to_string(),
            de_word: self.de_word,
            de_sentence: self.de_sentence,
            en_word: self.en_word,
            en_sentence: self.en_sentence,
            audio_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_projection_skips_metadata_field() {
        let schema = FieldSchema::default();
        let text = schema.project(&fields(&["meta", "Hund", "Der Hund läuft", "dog", "The dog runs"]));

        assert_eq!(text.de_word, "Hund");
        assert_eq!(text.de_sentence, "Der Hund läuft");
        assert_eq!(text.en_word, "dog");
        assert_eq!(text.en_sentence, "The dog runs");
    }

    #[test]
    fn test_projection_out_of_range_is_empty() {
        let schema = FieldSchema::default();
        let text = schema.project(&fields(&["meta", "Hund"]));

        assert_eq!(text.de_word, "Hund");
        assert_eq!(text.de_sentence, "");
        assert_eq!(text.en_word, "");
        assert_eq!(text.en_sentence, "");
        assert!(!text.is_empty());

        assert!(schema.project(&[]).is_empty());
    }

    #[test]
    fn test_into_card_carries_note_id() {
        let text = FieldSchema::default().project(&fields(&["", "Katze"]));
        let card = text.into_card(1404, None);

        assert_eq!(card.id, "1404");
        assert_eq!(card.note_id, "1404");
        assert_eq!(card.de_word, "Katze");
        assert!(card.audio_url.is_none());
    }
}
