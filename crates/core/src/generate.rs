// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deterministic synthetic-record generation.

use crate::error::{HarnessError, Result};
use crate::record::Customer;

/// Produce exactly `count` synthetic customers.
///
/// Deterministic given `count`: index `i` always yields name
/// `"Customer_{i}"`, description `"Description_{i}"`, and an active flag
/// alternating by parity. No I/O, no randomness.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidArgument`] when `count` is negative.
pub fn generate(count: i64) -> Result<Vec<Customer>> {
    if count < 0 {
        return Err(HarnessError::invalid(format!(
            "record count must be non-negative, got {count}"
        )));
    }

    let mut records = Vec::with_capacity(count as usize);
    for i in 0..count {
        records.push(Customer {
            id: None,
            name: format!("Customer_{i}"),
            description: format!("Description_{i}"),
            is_active: i % 2 == 0,
        });
    }
    Ok(records)
}
