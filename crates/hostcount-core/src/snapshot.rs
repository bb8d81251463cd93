//! Snapshot of every counter in the store and its text rendering.
//!
//! Rendering format, one line per key in enumeration order:
//!
//! ```text
//! <key> > <value>
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline. A key whose
//! value disappeared between enumeration and fetch renders with an empty value.

use std::fmt;

/// One key of the store and the value fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub key: String,
    /// `None` when the key vanished before its value could be read.
    pub value: Option<String>,
}

impl SnapshotEntry {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for SnapshotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.key, self.value.as_deref().unwrap_or(""))
    }
}

/// Ordered dump of the store. Order is whatever the store enumeration returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SnapshotEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SnapshotEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Render as the response body.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<SnapshotEntry> for Snapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
