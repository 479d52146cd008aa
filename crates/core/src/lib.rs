// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for the bulkbench harness.
//!
//! This crate holds everything that is pure and store-agnostic:
//!
//! - [`record`] - The synthetic [`Customer`] record and its update mutation
//! - [`generate`] - Deterministic batch generation for load tests
//! - [`result`] - The [`BenchmarkResult`] wire type and comparison math
//! - [`error`] - The harness-wide error taxonomy
//!
//! Nothing in this crate performs I/O; the store collaborator and the
//! operation runner live in `bulkbench-store` and `bulkbench-harness`.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod generate;
pub mod record;
pub mod result;

pub use error::{HarnessError, Result};
pub use generate::generate;
pub use record::Customer;
pub use result::{compare, report, BenchmarkResult, Comparison};
