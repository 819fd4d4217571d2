mod error;
mod model;
mod validate;

use std::path::Path;

pub use error::CatalogError;
pub use model::{ProjectRecord, ResultImage};

/// Catalog document compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../../data/projects.json");

/// Ordered, read-only list of projects.
///
/// Every constructor validates the records before handing out a catalog, so
/// holders can rely on unique ids and present required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(projects)
    }

    /// Read and validate a catalog document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_records(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        validate::validate(&projects)?;
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// First record whose id matches exactly. No partial matching.
    pub fn find_project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
