//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `front_desk`: the four-person roster used throughout the search scenarios
//! - `roster_dir`: a temp directory for writing JSON roster files

use employee_search::{Employee, MemoryStore};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Active roster: John Smith, Jane Doe, Johnson Alexander, John Doe (with email).
#[fixture]
#[allow(dead_code)]
pub fn front_desk() -> MemoryStore {
    MemoryStore::new(vec![
        Employee::new("1", "John Smith"),
        Employee::new("2", "Jane Doe"),
        Employee::new("3", "Johnson Alexander"),
        Employee::new("4", "John Doe").with_email("john.doe@example.com"),
    ])
}

/// Build a store of active employees with sequential ids.
#[allow(dead_code)] // Used by a subset of integration test crates
pub fn store_of(names: &[&str]) -> MemoryStore {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Employee::new(format!("{}", i + 1).as_str(), *name))
        .collect()
}

/// Full names of results, in order.
#[allow(dead_code)]
pub fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.full_name.as_str()).collect()
}

/// A temp directory holding roster files, cleaned up on drop.
#[allow(dead_code)]
pub struct RosterDir {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl RosterDir {
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` to `name` within the directory and returns its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
        path
    }
}

#[fixture]
#[allow(dead_code)]
pub fn roster_dir() -> RosterDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path().to_path_buf();
    RosterDir { _temp: temp, root }
}
