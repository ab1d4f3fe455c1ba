use regex::Regex;

/// Notes store their fields as a single text blob joined by U+001F.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Cleaned fields of one note, positional, plus every sound reference found
/// across them in order of appearance.
#[derive(Debug, Clone, Default)]
pub struct NoteFields {
    pub values: Vec<String>,
    pub sounds: Vec<String>,
}

/// Turns raw field blobs into display text: pulls `[sound:...]` references
/// out, drops HTML tags, and normalizes whitespace.
pub struct FieldCleaner {
    sound_re: Regex,
    markup_re: Regex,
    whitespace_re: Regex,
}

impl FieldCleaner {
    pub fn new() -> Self {
        FieldCleaner {
            sound_re: Regex::new(r"\[sound:([^\]]+)\]").unwrap(),
            markup_re: Regex::new(r"<[^>]+>").unwrap(),
            whitespace_re: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn split_note(&self, blob: &str) -> NoteFields {
        let mut note_fields = NoteFields::default();
        if blob.is_empty() {
            return note_fields;
        }

        for field in blob.split(FIELD_SEPARATOR) {
            let (cleaned, mut sounds) = self.extract_sounds(field);
            note_fields.values.push(self.strip_markup(&cleaned));
            note_fields.sounds.append(&mut sounds);
        }

        note_fields
    }

    /// Collects `[sound:...]` names in order and removes the matched spans.
    fn extract_sounds(&self, field: &str) -> (String, Vec<String>) {
        let sounds = self
            .sound_re
            .captures_iter(field)
            .map(|captures| captures[1].to_string())
            .collect();
        let cleaned = self.sound_re.replace_all(field, "").into_owned();

        (cleaned, sounds)
    }

    /// Replaces tag-like spans with spaces and collapses the result. No
    /// nesting awareness; unbalanced brackets degrade to best-effort text.
    fn strip_markup(&self, field: &str) -> String {
        let without_tags = self.markup_re.replace_all(field, " ");
        self.whitespace_re.replace_all(&without_tags, " ").trim().to_string()
    }
}
