//! # folio-core
//!
//! Core types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - The `Document` model (frontmatter, sections, document type)
//! - Frontmatter value types with ordered, pass-through key storage
//! - `Issue` records produced by validators
//! - `PlanStatus` lifecycle enum with its state machine transitions
//! - Cross-cutting error types
//! - CLI response types

pub mod document;
pub mod errors;
pub mod frontmatter;
pub mod issue;
pub mod responses;
pub mod status;
