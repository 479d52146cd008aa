// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The synthetic record persisted and mutated by the benchmark workloads.

use serde::{Deserialize, Serialize};

/// One unit of generated test data.
///
/// The identity is assigned by the store on persist, never by the
/// generator, so a freshly generated record carries `id: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identity; `None` until the record has been persisted
    /// with output mapping enabled.
    pub id: Option<i64>,
    /// Display name, `"Customer_{i}"` for generated index `i`.
    pub name: String,
    /// Free-text description, `"Description_{i}"` for generated index `i`.
    pub description: String,
    /// Alternates by generated index parity.
    pub is_active: bool,
}

impl Customer {
    /// The in-memory field transformation used by the update workloads:
    /// name gains an `"Updated_"` prefix, description an `"_Updated"`
    /// suffix.
    pub fn apply_update(&mut self) {
        self.name = format!("Updated_{}", self.name);
        self.description.push_str("_Updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_update_prefixes_and_suffixes() {
        let mut customer = Customer {
            id: Some(7),
            name: "Customer_7".into(),
            description: "Description_7".into(),
            is_active: false,
        };
        customer.apply_update();
        assert_eq!(customer.name, "Updated_Customer_7");
        assert_eq!(customer.description, "Description_7_Updated");
        assert_eq!(customer.id, Some(7));
    }

    #[test]
    fn apply_update_is_not_idempotent() {
        // Running the update workload twice stacks the markers, same as
        // the naive ORM loop would.
        let mut customer = Customer {
            id: None,
            name: "Customer_0".into(),
            description: "Description_0".into(),
            is_active: true,
        };
        customer.apply_update();
        customer.apply_update();
        assert_eq!(customer.name, "Updated_Updated_Customer_0");
        assert_eq!(customer.description, "Description_0_Updated_Updated");
    }
}
