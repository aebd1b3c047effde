use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Milestone 1: A journal that only manages entries
// =============================================================================

/// Numbered text entries. The entry counter lives on the instance and starts
/// at 1; indices are never reused, even after removals.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    entries: BTreeMap<u32, String>,
    next_index: u32,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_index: 1,
        }
    }

    /// Adds an entry and returns the index it was filed under.
    pub fn add_entry(&mut self, text: &str) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        self.entries.insert(index, text.to_string());
        index
    }

    /// Returns whether an entry was actually removed.
    pub fn remove_entry(&mut self, index: u32) -> bool {
        self.entries.remove(&index).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, text) in &self.entries {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{index}: {text}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Milestone 2: Persistence as a separate collaborator
// =============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode journal '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{name}' does not contain a valid journal: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn write(name: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            name: name.into(),
            source,
        }
    }

    pub fn read(name: impl Into<String>, source: io::Error) -> Self {
        Self::Read {
            name: name.into(),
            source,
        }
    }
}

/// Somewhere text blobs can be persisted and read back. The journal knows
/// nothing about storage; that responsibility lives behind this trait.
pub trait TextStore {
    fn persist(&mut self, name: &str, contents: &str) -> Result<(), StoreError>;
    fn retrieve(&self, name: &str) -> Result<String, StoreError>;
}

/// Stores each blob as a file under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl TextStore for FileStore {
    fn persist(&mut self, name: &str, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::write(name, source))?;
        fs::write(self.path_for(name), contents).map_err(|source| StoreError::write(name, source))
    }

    fn retrieve(&self, name: &str) -> Result<String, StoreError> {
        fs::read_to_string(self.path_for(name)).map_err(|source| StoreError::read(name, source))
    }
}

/// In-memory store, handy for tests.
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStore for MemoryStore {
    fn persist(&mut self, name: &str, contents: &str) -> Result<(), StoreError> {
        self.blobs.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn retrieve(&self, name: &str) -> Result<String, StoreError> {
        self.blobs.get(name).cloned().ok_or_else(|| {
            StoreError::read(
                name,
                io::Error::new(io::ErrorKind::NotFound, "no such blob"),
            )
        })
    }
}

// =============================================================================
// Milestone 3: Saving and restoring a journal through any store
// =============================================================================

pub fn save_journal(
    store: &mut dyn TextStore,
    name: &str,
    journal: &Journal,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string_pretty(journal).map_err(|source| StoreError::Encode {
        name: name.to_string(),
        source,
    })?;
    store.persist(name, &encoded)
}

pub fn load_journal(store: &dyn TextStore, name: &str) -> Result<Journal, StoreError> {
    let raw = store.retrieve(name)?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
        name: name.to_string(),
        source,
    })
}

fn main() {
    println!("{}", "=== A journal with one responsibility ===".bold());
    let mut journal = Journal::new();
    journal.add_entry("I studied today.");
    journal.add_entry("I cooked pancakes.");
    println!("{journal}");

    println!(
        "\n{}",
        "=== Persistence handled by a separate store ===".bold()
    );
    let root = std::env::temp_dir().join("solid_journal_demo");
    let mut store = FileStore::new(&root);
    match save_journal(&mut store, "journal.json", &journal) {
        Ok(()) => println!(
            "{} {}",
            "saved to".green(),
            root.join("journal.json").display()
        ),
        Err(err) => eprintln!("{} {err}", "save failed:".red()),
    }

    match load_journal(&store, "journal.json") {
        Ok(restored) => println!("restored a journal with {} entries", restored.len()),
        Err(err) => eprintln!("{} {err}", "load failed:".red()),
    }
}

// =============================================================================
// Tests
// =============================================================================
