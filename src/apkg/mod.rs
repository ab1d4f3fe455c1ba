use std::{
    collections::HashMap,
    fs::{
        self,
        File,
    },
    io::Read,
    path::{
        Path,
        PathBuf,
    },
};

use zip::{
    result::ZipError,
    ZipArchive,
};

use crate::core::DeckError;

pub mod fields;
pub mod media;
pub mod notes;

const COLLECTION_SUFFIXES: [&str; 2] = [".anki2", ".anki21"];
const MEDIA_MANIFEST: &str = "media";

/// An opened .apkg export. Holds the zip handle for media reads, the path of
/// the collection extracted into the caller's scratch directory, and the
/// reverse media lookup (original filename -> storage key).
pub struct ApkgFile {
    archive: ZipArchive<File>,
    collection: PathBuf,
    filename_to_key: HashMap<String, String>,
}

impl ApkgFile {
    pub fn open(path: &Path, scratch_dir: &Path) -> Result<Self, DeckError> {
        if !path.exists() {
            return Err(DeckError::ApkgNotFound(path.to_path_buf()));
        }

        let mut archive = ZipArchive::new(File::open(path)?)?;

        let collection_entry = archive
            .file_names()
            .find(|name| COLLECTION_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
            .map(str::to_string)
            .ok_or(DeckError::MissingCollection)?;

        let collection = scratch_dir.join("collection.sqlite");
        let bytes = read_entry(&mut archive, &collection_entry)?
            .ok_or(DeckError::MissingCollection)?;
        fs::write(&collection, bytes)?;

        let filename_to_key = match read_entry(&mut archive, MEDIA_MANIFEST)? {
            Some(raw) => {
                let key_to_filename: HashMap<String, String> = serde_json::from_slice(&raw)?;
                // If two storage keys carry the same filename, the later one wins.
                key_to_filename.into_iter().map(|(key, name)| (name, key)).collect()
            }
            None => HashMap::new(),
        };

        Ok(ApkgFile { archive, collection, filename_to_key })
    }

    pub fn collection_path(&self) -> &Path {
        &self.collection
    }

    /// Storage key for an original media filename, if the manifest lists it.
    pub fn storage_key(&self, filename: &str) -> Option<&str> {
        self.filename_to_key.get(filename).map(String::as_str)
    }

    /// Bytes of one media entry; None when the manifest named a key that is
    /// not actually present in the archive.
    pub fn read_media(&mut self, key: &str) -> Result<Option<Vec<u8>>, DeckError> {
        read_entry(&mut self.archive, key)
    }
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Result<Option<Vec<u8>>, DeckError> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            Ok(Some(bytes))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(error) => Err(error.into()),
    }
}
