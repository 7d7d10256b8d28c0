//! Filesystem-backed content store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ContentStore, ResourcePath, Result, RetrievalError};

/// Reads resources from a data directory laid out as:
///
/// ```text
/// <root>/metadata.json
/// <root>/<category>.json
/// <root>/<category>/<id>.txt
/// <root>/skills.txt
/// ```
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at the given data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path to a file under the root.
    pub fn file_for(&self, path: &ResourcePath) -> Result<PathBuf> {
        let file = match path {
            ResourcePath::Metadata => self.root.join("metadata.json"),
            ResourcePath::Listing(category) => self.root.join(format!("{}.json", category)),
            ResourcePath::Item { category, id } => {
                validate_id(id)?;
                self.root
                    .join(category.as_str())
                    .join(format!("{}.txt", id))
            }
            ResourcePath::Skills => self.root.join("skills.txt"),
        };
        Ok(file)
    }
}

/// Item ids become file names; anything that could escape the category
/// directory is refused.
fn validate_id(id: &str) -> Result<()> {
    let invalid = id.trim().is_empty()
        || id.contains(['/', '\\'])
        || id == "."
        || id == "..";
    if invalid {
        return Err(RetrievalError::InvalidAddress(id.to_string()));
    }
    Ok(())
}

impl ContentStore for FsContentStore {
    fn fetch(&self, path: &ResourcePath) -> Result<String> {
        let file = self.file_for(path)?;
        tracing::debug!(resource = %path, file = %file.display(), "reading resource");

        std::fs::read_to_string(&file).map_err(|source| match source.kind() {
            ErrorKind::NotFound => RetrievalError::NotFound(path.clone()),
            _ => RetrievalError::Unavailable {
                path: path.clone(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("metadata.json"),
            r#"{"characters": [{"id": "aldric", "name": "Aldric"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("locations.json"),
            r#"[{"id": "harbor", "name": "The Harbor"}]"#,
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("characters")).unwrap();
        std::fs::write(
            dir.path().join("characters").join("aldric.txt"),
            "Aldric of the March.\nSworn to the crown.",
        )
        .unwrap();
        std::fs::write(dir.path().join("skills.txt"), "Fireball: burns\n").unwrap();
        dir
    }

    #[test]
    fn test_file_layout() {
        let store = FsContentStore::new("/data");
        assert_eq!(
            store.file_for(&ResourcePath::Metadata).unwrap(),
            PathBuf::from("/data/metadata.json")
        );
        assert_eq!(
            store.file_for(&ResourcePath::Listing(Category::Deities)).unwrap(),
            PathBuf::from("/data/deities.json")
        );
        assert_eq!(
            store
                .file_for(&ResourcePath::item(Category::Locations, "harbor"))
                .unwrap(),
            PathBuf::from("/data/locations/harbor.txt")
        );
        assert_eq!(
            store.file_for(&ResourcePath::Skills).unwrap(),
            PathBuf::from("/data/skills.txt")
        );
    }

    #[test]
    fn test_reads_resources() {
        let dir = data_dir();
        let store = FsContentStore::new(dir.path());

        let bundle = store.fetch_metadata().unwrap();
        assert_eq!(bundle.listing(Category::Characters).unwrap()[0].name, "Aldric");

        let listing = store.fetch_listing(Category::Locations).unwrap();
        assert_eq!(listing[0].id, "harbor");

        let text = store
            .fetch(&ResourcePath::item(Category::Characters, "aldric"))
            .unwrap();
        assert!(text.starts_with("Aldric of the March."));

        assert_eq!(store.fetch(&ResourcePath::Skills).unwrap(), "Fireball: burns\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = data_dir();
        let store = FsContentStore::new(dir.path());

        let err = store
            .fetch(&ResourcePath::item(Category::Deities, "sol"))
            .unwrap_err();
        assert!(matches!(err, RetrievalError::NotFound(_)));
        assert_eq!(err.to_string(), "resource not found: deities/sol");
    }

    #[test]
    fn test_rejects_escaping_ids() {
        let store = FsContentStore::new("/data");
        for id in ["../metadata", "a/b", "a\\b", "", "  ", ".", ".."] {
            let err = store
                .fetch(&ResourcePath::item(Category::Characters, id))
                .unwrap_err();
            assert!(matches!(err, RetrievalError::InvalidAddress(_)), "id {:?}", id);
        }
    }

    #[test]
    fn test_dotted_ids_stay_in_category() {
        let store = FsContentStore::new("/data");
        for id in ["a..b", "St. Aldric", "...", "v1..2"] {
            let file = store.file_for(&ResourcePath::item(Category::Characters, id)).unwrap();
            assert_eq!(file, Path::new("/data/characters").join(format!("{}.txt", id)));
        }
    }
}
