//! Loading the three source files from the data directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;

use foodaudit_recon::config::SourceFiles;
use foodaudit_recon::SourceKind;

/// Raw text of each source, in memory.
#[derive(Debug)]
pub struct SourceTexts {
    pub delivery: String,
    pub usage: String,
    pub inventory: String,
}

#[derive(Debug)]
pub struct ReadError {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {} ({}): {}", self.kind, self.path.display(), self.message)
    }
}

impl std::error::Error for ReadError {}

/// Path of `kind`'s file under `data_dir`.
pub fn source_path(data_dir: &Path, files: &SourceFiles, kind: SourceKind) -> PathBuf {
    data_dir.join(files.get(kind))
}

/// Read all three sources concurrently. On failure, reports the first
/// failing source in delivery, usage, inventory order.
pub fn read_sources(data_dir: &Path, files: &SourceFiles) -> Result<SourceTexts, ReadError> {
    let [delivery, usage, inventory] = thread::scope(|s| {
        let handles = SourceKind::ALL.map(|kind| {
            let path = source_path(data_dir, files, kind);
            (kind, s.spawn(move || read_source(kind, &path)))
        });
        handles.map(|(kind, h)| {
            h.join().unwrap_or_else(|_| {
                Err(ReadError {
                    kind,
                    path: source_path(data_dir, files, kind),
                    message: "reader thread panicked".into(),
                })
            })
        })
    });

    Ok(SourceTexts {
        delivery: delivery?,
        usage: usage?,
        inventory: inventory?,
    })
}

/// Read one source as UTF-8 text. A leading byte-order mark is dropped.
pub fn read_source(kind: SourceKind, path: &Path) -> Result<String, ReadError> {
    let err = |message: String| ReadError {
        kind,
        path: path.to_path_buf(),
        message,
    };

    let bytes = std::fs::read(path).map_err(|e| err(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| err(format!("not valid UTF-8: {e}")))?;
    log::debug!("read {kind} ({}): {} bytes", path.display(), text.len());

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all(dir: &Path) {
        std::fs::write(dir.join("delivery.txt"), "banana=50\n").unwrap();
        std::fs::write(dir.join("usage.csv"), "food,quantity\nbanana,25\n").unwrap();
        std::fs::write(dir.join("inventory.json"), "[]").unwrap();
    }

    #[test]
    fn reads_all_three() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let texts = read_sources(dir.path(), &SourceFiles::default()).unwrap();
        assert_eq!(texts.delivery, "banana=50\n");
        assert!(texts.usage.starts_with("food,quantity"));
        assert_eq!(texts.inventory, "[]");
    }

    #[test]
    fn missing_file_names_role_and_path() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        std::fs::remove_file(dir.path().join("usage.csv")).unwrap();

        let err = read_sources(dir.path(), &SourceFiles::default()).unwrap_err();
        assert_eq!(err.kind, SourceKind::Usage);
        let msg = err.to_string();
        assert!(msg.starts_with("cannot read usage file ("), "{msg}");
        assert!(msg.contains("usage.csv"), "{msg}");
    }

    #[test]
    fn first_failure_in_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sources(dir.path(), &SourceFiles::default()).unwrap_err();
        assert_eq!(err.kind, SourceKind::Delivery);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delivery.txt");
        std::fs::write(&path, [0x62, 0xff, 0x3d, 0x31]).unwrap();
        let err = read_source(SourceKind::Delivery, &path).unwrap_err();
        assert!(err.message.contains("UTF-8"));
    }

    #[test]
    fn bom_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.csv");
        std::fs::write(&path, "\u{feff}food,quantity\n").unwrap();
        assert_eq!(read_source(SourceKind::Usage, &path).unwrap(), "food,quantity\n");
    }
}
