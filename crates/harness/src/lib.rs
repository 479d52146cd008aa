// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Operation runner and suite orchestration for bulkbench.
//!
//! # Modules
//!
//! - [`runner`] - Executes one named persistence strategy and times only
//!   the store call
//! - [`suite`] - Runs the full operation sequence and attaches comparisons
//! - [`io`] - Reading/writing result files
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod io;
pub mod markdown;
pub mod runner;
pub mod suite;

pub use runner::BenchRunner;
pub use suite::run_suite;
