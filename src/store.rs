//! Sources of active employees.
//!
//! The search engine only needs one bulk read per query. Ordering of the
//! returned list is the tie-break order for equal scores.

use crate::employee::Employee;
use crate::error::StoreError;
use serde::Deserialize;
use std::convert::Infallible;
use std::path::{Path, PathBuf};

/// Read access to the current set of active employees.
pub trait EmployeeStore {
    type Error;

    /// Every employee whose active flag is set, as of now.
    fn fetch_active_employees(&self) -> Result<Vec<Employee>, Self::Error>;
}

impl<T: EmployeeStore + ?Sized> EmployeeStore for &T {
    type Error = T::Error;

    fn fetch_active_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        (**self).fetch_active_employees()
    }
}

/// In-memory roster. Deactivated employees are kept but never returned.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
}

impl MemoryStore {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EmployeeStore for MemoryStore {
    type Error = Infallible;

    fn fetch_active_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        Ok(self
            .employees
            .iter()
            .filter(|employee| employee.is_active)
            .cloned()
            .collect())
    }
}

/// A JSON roster exported by the directory sync, re-read on every fetch.
///
/// Accepts either a bare array of employees or `{ "employees": [...] }`.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Roster {
    List(Vec<Employee>),
    Wrapped { employees: Vec<Employee> },
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EmployeeStore for RosterFile {
    type Error = StoreError;

    fn fetch_active_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let roster: Roster =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let employees = match roster {
            Roster::List(employees) | Roster::Wrapped { employees } => employees,
        };
        let total = employees.len();
        let active: Vec<Employee> = employees.into_iter().filter(|e| e.is_active).collect();

        tracing::debug!(
            path = %self.path.display(),
            total,
            active = active.len(),
            "Loaded employee roster"
        );

        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_memory_store_filters_inactive() {
        let store: MemoryStore = [
            Employee::new("1", "John Doe").inactive(),
            Employee::new("2", "Jane Doe"),
        ]
        .into_iter()
        .collect();

        let_assert!(Ok(active) = store.fetch_active_employees());
        check!(active.len() == 1);
        check!(active[0].full_name == "Jane Doe");
        check!(store.len() == 2);
    }

    #[test]
    fn test_memory_store_preserves_order() {
        let mut store = MemoryStore::default();
        for name in ["Cid", "Ann", "Bob"] {
            store.push(Employee::new(name, name));
        }
        let_assert!(Ok(active) = store.fetch_active_employees());
        let names: Vec<_> = active.iter().map(|e| e.full_name.as_str()).collect();
        check!(names == vec!["Cid", "Ann", "Bob"]);
    }
}
