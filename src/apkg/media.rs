use std::{
    fs,
    path::PathBuf,
};

use super::ApkgFile;
use crate::core::DeckError;

/// Copies referenced audio out of the archive into the public media
/// directory. Only the first sound reference of a note is used; every
/// unresolvable reference degrades to "no audio" rather than an error.
pub struct MediaExtractor {
    media_dir: PathBuf,
    enabled: bool,
}

impl MediaExtractor {
    pub fn new(media_dir: PathBuf, enabled: bool) -> Self {
        MediaExtractor { media_dir, enabled }
    }

    /// Resolves a note's sound references to a public `/media/...` URL,
    /// writing the file on first sight. Files already on disk are kept
    /// as-is, so reruns return the same URL without rewriting bytes.
    pub fn extract(
        &self,
        apkg: &mut ApkgFile,
        sounds: &[String],
    ) -> Result<Option<String>, DeckError> {
        if !self.enabled {
            return Ok(None);
        }

        let filename = match sounds.first() {
            Some(filename) => filename,
            None => return Ok(None),
        };

        let key = match apkg.storage_key(filename) {
            Some(key) => key.to_string(),
            None => return Ok(None), // manifest does not list this file
        };

        let bytes = match apkg.read_media(&key)? {
            Some(bytes) => bytes,
            None => return Ok(None), // manifest names an entry the archive lacks
        };

        let target = self.media_dir.join(filename);
        if !target.exists() {
            fs::create_dir_all(&self.media_dir)?;
            fs::write(&target, bytes)?;
        }

        Ok(Some(format!("/media/{}", filename)))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::Write,
    };

    use tempfile::TempDir;
    use zip::{
        write::SimpleFileOptions,
        ZipWriter,
    };

    use super::*;

    /// Minimal archive: a throwaway collection entry, a manifest mapping
    /// key "0" to hund.mp3, and the media entry for key "0" only.
    fn write_fixture_apkg(dir: &TempDir) -> ApkgFile {
        let path = dir.path().join("fixture.apkg");
        let mut writer = ZipWriter::new(fs::File::create(&path).unwrap());
        let options = SimpleFileOptions::default();

        writer.start_file("collection.anki2", options).unwrap();
        writer.write_all(b"unused").unwrap();
        writer.start_file("media", options).unwrap();
        writer
            .write_all(br#"{"0": "hund.mp3", "1": "katze.mp3"}"#)
            .unwrap();
        writer.start_file("0", options).unwrap();
        writer.write_all(b"mp3-bytes").unwrap();
        writer.finish().unwrap();

        ApkgFile::open(&path, dir.path()).unwrap()
    }

    fn sounds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_writes_file_and_builds_url() {
        let dir = TempDir::new().unwrap();
        let mut apkg = write_fixture_apkg(&dir);
        let extractor = MediaExtractor::new(dir.path().join("media"), true);

        let url = extractor.extract(&mut apkg, &sounds(&["hund.mp3"])).unwrap();

        assert_eq!(url.as_deref(), Some("/media/hund.mp3"));
        assert_eq!(fs::read(dir.path().join("media/hund.mp3")).unwrap(), b"mp3-bytes");
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let mut apkg = write_fixture_apkg(&dir);
        let extractor = MediaExtractor::new(dir.path().join("media"), true);

        let first = extractor.extract(&mut apkg, &sounds(&["hund.mp3"])).unwrap();
        fs::write(dir.path().join("media/hund.mp3"), b"kept").unwrap();
        let second = extractor.extract(&mut apkg, &sounds(&["hund.mp3"])).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(dir.path().join("media/hund.mp3")).unwrap(), b"kept");
    }

    #[test]
    fn test_only_first_reference_is_used() {
        let dir = TempDir::new().unwrap();
        let mut apkg = write_fixture_apkg(&dir);
        let extractor = MediaExtractor::new(dir.path().join("media"), true);

        // katze.mp3 would resolve, but it is not first.
        let url = extractor
            .extract(&mut apkg, &sounds(&["missing.mp3", "hund.mp3"]))
            .unwrap();

        assert!(url.is_none());
        assert!(!dir.path().join("media").exists());
    }

    #[test]
    fn test_manifest_lie_yields_no_audio() {
        let dir = TempDir::new().unwrap();
        let mut apkg = write_fixture_apkg(&dir);
        let extractor = MediaExtractor::new(dir.path().join("media"), true);

        // Manifest maps katze.mp3 to key "1" but the archive has no entry "1".
        let url = extractor.extract(&mut apkg, &sounds(&["katze.mp3"])).unwrap();

        assert!(url.is_none());
    }

    #[test]
    fn test_disabled_extractor_is_inert() {
        let dir = TempDir::new().unwrap();
        let mut apkg = write_fixture_apkg(&dir);
        let extractor = MediaExtractor::new(dir.path().join("media"), false);

        let url = extractor.extract(&mut apkg, &sounds(&["hund.mp3"])).unwrap();

        assert!(url.is_none());
        assert!(!dir.path().join("media").exists());
    }
}
