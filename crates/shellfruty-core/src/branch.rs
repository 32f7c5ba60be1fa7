//! # Branch Directory
//!
//! Maps branch ids (`id_sucursal`) to display names. The caller builds it
//! from the branch catalog and passes it in; nothing here reads storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the branch catalog (`GET /sucursal`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Branch {
    #[serde(rename = "id_sucursal")]
    #[ts(type = "number")]
    pub id: i64,

    #[serde(rename = "nombre_sucursal")]
    pub name: String,
}

/// Injected `id → name` lookup used when printing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchDirectory {
    names: BTreeMap<i64, String>,
}

impl BranchDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a branch name.
    pub fn insert(&mut self, id: i64, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Display name for `id`, falling back to `"Sucursal #<id>"`.
    ///
    /// ```rust
    /// use shellfruty_core::BranchDirectory;
    ///
    /// let mut branches = BranchDirectory::new();
    /// branches.insert(1, "Centro");
    /// assert_eq!(branches.name_for(1), "Centro");
    /// assert_eq!(branches.name_for(9), "Sucursal #9");
    /// ```
    pub fn name_for(&self, id: i64) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Sucursal #{}", id))
    }

    /// Name to print for a sale's branch. Ids `<= 0` mean "no branch" and
    /// yield an empty string, which suppresses the branch header line.
    pub fn ticket_name(&self, id: i64) -> String {
        if id <= 0 {
            return String::new();
        }
        self.name_for(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Catalog entries ordered by id.
    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.names.iter().map(|(id, name)| Branch {
            id: *id,
            name: name.clone(),
        })
    }
}

impl FromIterator<Branch> for BranchDirectory {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        let mut directory = BranchDirectory::new();
        for branch in iter {
            directory.insert(branch.id, branch.name);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_json() {
        let catalog: Vec<Branch> = serde_json::from_str(
            r#"[{"id_sucursal": 2, "nombre_sucursal": "Mercado Campesino"},
                {"id_sucursal": 1, "nombre_sucursal": "Centro"}]"#,
        )
        .unwrap();
        let directory: BranchDirectory = catalog.into_iter().collect();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name_for(2), "Mercado Campesino");
        let ids: Vec<i64> = directory.branches().map(|b| b.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_ticket_name_without_branch() {
        let directory = BranchDirectory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.ticket_name(0), "");
        assert_eq!(directory.ticket_name(3), "Sucursal #3");
    }

    #[test]
    fn test_insert_replaces_name() {
        let mut directory = BranchDirectory::new();
        directory.insert(1, "Centro");
        directory.insert(1, "Centro Histórico");
        assert_eq!(directory.name_for(1), "Centro Histórico");
    }
}
