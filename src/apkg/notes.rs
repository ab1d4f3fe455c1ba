use std::path::Path;

use rusqlite::{
    Connection,
    OpenFlags,
};

use crate::core::DeckError;

/// One row of the notes relation, as stored: the note id and the raw field
/// blob (fields joined by U+001F).
#[derive(Debug, Clone)]
pub struct NoteRow {
    pub id: i64,
    pub fields: String,
}

/// Reads every note from the extracted collection, in storage order.
pub fn read_notes(collection: &Path) -> Result<Vec<NoteRow>, DeckError> {
    let conn = Connection::open_with_flags(collection, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let mut stmt = conn.prepare("SELECT id, flds FROM notes")?;
    let rows = stmt
        .query_map([], |row| Ok(NoteRow { id: row.get(0)?, fields: row.get(1)? }))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}
