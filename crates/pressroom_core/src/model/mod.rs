//! Typed domain model for the article/category aggregate.
//!
//! # Responsibility
//! - Define immutable value objects materialized from joined SQL rows.
//! - Enforce strict field presence and typing at construction time.
//!
//! # Invariants
//! - A domain value either constructs fully or not at all; validation
//!   failures name the offending field and leave nothing behind.
//! - Equality is value semantics over all fields.

pub mod article;
pub mod category;
pub mod fields;
