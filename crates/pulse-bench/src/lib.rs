//! # pulse-bench
//!
//! Picks the market benchmark for a resolved role.
//!
//! Selection walks relaxation tiers from most to least specific and stops at
//! the first tier with any candidate row:
//!
//! | tier               | ignored dimensions                          |
//! |--------------------|---------------------------------------------|
//! | `exact`            | none                                        |
//! | `any_company_size` | company size                                |
//! | `any_region`       | company size, region                        |
//! | `any_industry`     | company size, region, industry              |
//! | `any_seniority`    | company size, region, industry, seniority   |
//!
//! Role family and standardized title are never relaxed by [`BenchmarkSelector::select`].
//! Several surviving rows are merged by averaging each percentile band.

mod aggregate;
mod selector;
mod tier;

pub use aggregate::merge_rows;
pub use selector::{BenchmarkRole, BenchmarkSelection, BenchmarkSelector};
pub use tier::{Dimension, SelectionTier};
