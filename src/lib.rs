//! Shift Calendar Calculation Engine (SKC)
//!
//! This crate computes per-day worked-hour breakdowns for a calendar month of
//! shift-code entries, groups the results by ISO week, and produces monthly
//! summaries. The engine itself is pure and stateless; shift-code definitions
//! come from a read-only registry supplied by the caller.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod registry;
