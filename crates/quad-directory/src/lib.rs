//! Program and department directory for the college site.
//!
//! A read-only lookup over the institution's program catalog. The chat
//! engine consults it to detect program-specific questions; it owns no
//! mutable state and performs no I/O.

mod data;

use serde::Serialize;

/// A degree program offered by the institution.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    /// Stable identifier, e.g. `bsc-cs`.
    pub id: String,
    /// Display name, e.g. "BSc Computer Science".
    pub name: String,
    /// Degree awarded, e.g. "BSc".
    pub degree: String,
    /// Identifier of the owning department.
    pub department_id: String,
    /// One-line description shown in program listings.
    pub description: String,
    /// Lowercase name fragments that identify this program in free text.
    pub aliases: Vec<String>,
}

/// A department descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon name used by the front end.
    pub icon: String,
}

/// Read-only directory of programs and departments.
///
/// Seeded once at construction; all lookups are pure functions over the
/// seeded tables.
pub struct ProgramDirectory {
    programs: Vec<Program>,
    departments: Vec<Department>,
}

impl ProgramDirectory {
    /// Create a directory seeded with the institution's catalog.
    pub fn new() -> Self {
        Self {
            programs: data::seed_programs(),
            departments: data::seed_departments(),
        }
    }

    /// All known departments, in catalog order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Programs belonging to a department, in catalog order.
    pub fn programs_by_department(&self, department_id: &str) -> Vec<&Program> {
        self.programs
            .iter()
            .filter(|p| p.department_id == department_id)
            .collect()
    }

    /// Find programs mentioned in free text.
    ///
    /// A program matches when any of its aliases appears as a substring of
    /// the lowercased text. Results keep catalog order and contain no
    /// duplicates.
    pub fn search_programs(&self, text: &str) -> Vec<&Program> {
        let lower = text.to_lowercase();
        if lower.trim().is_empty() {
            return Vec::new();
        }
        self.programs
            .iter()
            .filter(|p| p.aliases.iter().any(|a| lower.contains(a.as_str())))
            .collect()
    }
}

impl Default for ProgramDirectory {
    fn default() -> Self {
        Self::new()
    }
}
