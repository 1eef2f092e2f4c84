//! # filialen-domain
//!
//! Pure domain model for the filialen branch-office registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Filialen** (branch offices) and their field-level invariants
//! - Collect validation failures per field so adapters can report them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod filiaal;
