// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Route modules.

pub mod bench;
pub mod health;
