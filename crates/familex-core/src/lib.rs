//! familex-core — session model, page flow, and CSV export.
//!
//! This crate defines the data model, per-participant session state, the
//! three-page flow controller, survey-definition parsing, and the export
//! artifact that the familex instrument builds on. It has no terminal
//! coupling; rendering happens behind the [`flow::Frontend`] seam.

pub mod error;
pub mod export;
pub mod flow;
pub mod model;
pub mod parser;
pub mod session;
pub mod words;
