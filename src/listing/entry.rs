use serde::Deserialize;
use std::fmt;

/// Kind of entry reported by the listing endpoint.
///
/// The wire format only names `file` and `directory`; anything else is
/// preserved as `Other` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    #[serde(other)]
    Other,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        *self == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        *self == EntryKind::File
    }
}

/// Last-modified value as received from the endpoint.
///
/// The endpoint may send either a string or a number; both are kept
/// verbatim and displayed exactly as received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModifiedTime {
    Text(String),
    Numeric(serde_json::Number),
}

impl fmt::Display for ModifiedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifiedTime::Text(s) => f.write_str(s),
            ModifiedTime::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// One flat entry descriptor from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "lastModifiedTime")]
    pub modified: ModifiedTime,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind, modified: ModifiedTime) -> Self {
        Self {
            name: name.into(),
            kind,
            modified,
        }
    }

    /// Derive the icon key for this entry.
    ///
    /// Directories key on their own name so that known folder names can get
    /// dedicated markers. Files key on the lowercased text after the last
    /// `.`, or the full name unchanged when there is no dot. Other kinds
    /// have no icon and key to the empty string.
    pub fn icon_key(&self) -> String {
        match self.kind {
            EntryKind::Directory => self.name.clone(),
            EntryKind::File => match self.name.rfind('.') {
                Some(dot) => self.name[dot + 1..].to_lowercase(),
                None => self.name.clone(),
            },
            EntryKind::Other => String::new(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a file named "stem.EXT" keys on the lowercased text
        /// after the last dot
        #[test]
        fn file_extension_is_lowercased(
            stem in "[a-zA-Z0-9_-]{1,12}",
            ext in "[a-zA-Z0-9]{1,8}"
        ) {
            let entry = ListingEntry::new(
                format!("{}.{}", stem, ext),
                EntryKind::File,
                ModifiedTime::Text(String::new()),
            );
            prop_assert_eq!(entry.icon_key(), ext.to_lowercase());
        }

        /// Property: a dotless file name is its own key, unchanged
        #[test]
        fn dotless_file_name_is_key(name in "[^.]{0,20}") {
            let entry = ListingEntry::new(
                name.clone(),
                EntryKind::File,
                ModifiedTime::Text(String::new()),
            );
            prop_assert_eq!(entry.icon_key(), name);
        }

        /// Property: a directory keys on its own name, whatever it contains
        #[test]
        fn directory_name_is_key(name in ".*") {
            let entry = ListingEntry::new(
                name.clone(),
                EntryKind::Directory,
                ModifiedTime::Text(String::new()),
            );
            prop_assert_eq!(entry.icon_key(), name);
        }

        /// Property: key derivation never panics, for any kind and name
        #[test]
        fn icon_key_is_total(name in any::<String>(), kind_idx in 0usize..3) {
            let kind = [EntryKind::File, EntryKind::Directory, EntryKind::Other][kind_idx];
            let entry = ListingEntry::new(name, kind, ModifiedTime::Text(String::new()));
            let _ = entry.icon_key();
        }
    }
}
