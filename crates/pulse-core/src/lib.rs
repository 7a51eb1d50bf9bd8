//! # pulse-core
//!
//! Core types and error types for Pulse.
//!
//! This crate provides the foundational types shared across all Pulse crates:
//! - Entity structs for the workforce data model (employees, benchmarks,
//!   role mappings, KPI values, health snapshots, compensation targets)
//! - Classification enums (seniority, employment type, KPI categories, ...)
//! - Cross-cutting error types
//!
//! Nothing in here performs I/O. Callers own persistence and hand the
//! engines plain in-memory records.

pub mod entities;
pub mod enums;
pub mod errors;

pub use errors::CoreError;
