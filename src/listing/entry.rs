use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Name of the per-folder password file. It is listed like any other file but
/// can never be selected for bulk actions.
pub const PASSWORD_FILE: &str = ".password";

/// One file or folder of a directory listing, as reported by the drive API.
///
/// Entries are immutable snapshots handed in by the caller; nothing in the
/// listing code mutates them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique within one listing
    pub id: String,
    /// Raw, unescaped name
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub last_modified_date_time: DateTime<FixedOffset>,
    /// Present for directories, absent for files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderFacet>,
}

/// Folder marker. Only its presence matters to the listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderFacet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<u64>,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.folder.is_some()
    }

    /// Folders and the password file are never selectable.
    pub fn is_selectable(&self) -> bool {
        !self.is_folder() && self.name != PASSWORD_FILE
    }

    /// Lower-cased extension of a file name, `None` for folders and names
    /// without a dot (a leading dot alone does not count).
    pub fn extension(&self) -> Option<String> {
        if self.is_folder() {
            return None;
        }
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_ascii_lowercase()),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn ts() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-05T14:07:09Z").unwrap()
    }

    pub fn file(id: &str, name: &str, size: u64) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            size,
            last_modified_date_time: ts(),
            folder: None,
        }
    }

    pub fn folder(id: &str, name: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            size: 0,
            last_modified_date_time: ts(),
            folder: Some(FolderFacet { child_count: Some(3) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{file, folder};
    use super::*;

    #[test]
    fn password_file_is_never_selectable() {
        assert!(!file("1", ".password", 10).is_selectable());
        let mut f = folder("2", ".password");
        assert!(!f.is_selectable());
        f.folder = None;
        assert!(!f.is_selectable());
    }

    #[test]
    fn folders_are_not_selectable() {
        assert!(!folder("1", "docs").is_selectable());
        assert!(file("2", "docs.txt", 1).is_selectable());
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file("1", "Photo.JPG", 1).extension().as_deref(), Some("jpg"));
        assert_eq!(file("2", ".bashrc", 1).extension(), None);
        assert_eq!(file("3", "README", 1).extension(), None);
        assert_eq!(folder("4", "x.zip").extension(), None);
    }

    #[test]
    fn deserializes_drive_api_shape() {
        let json = r#"{
            "id": "01ABC",
            "name": "report.pdf",
            "size": 2048,
            "lastModifiedDateTime": "2023-11-02T08:30:00Z",
            "file": { "mimeType": "application/pdf" }
        }"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(e.name, "report.pdf");
        assert_eq!(e.size, 2048);
        assert!(!e.is_folder());

        let json = r#"{
            "id": "01DEF",
            "name": "Music",
            "size": 0,
            "lastModifiedDateTime": "2023-11-02T08:30:00+02:00",
            "folder": { "childCount": 12 }
        }"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert!(e.is_folder());
        assert_eq!(e.folder.unwrap().child_count, Some(12));
    }
}
