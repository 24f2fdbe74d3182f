//! # hip-core
//!
//! Core types, feature catalog, and error types for the hip pain calculator.
//!
//! This crate provides the foundational types shared across all crates:
//! - Follow-up timepoints and the categorical pain level scale
//! - The static feature catalog (names, descriptions, input kinds)
//! - Patient records and feature values
//! - The clamped pain score newtype
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod enums;
pub mod errors;
pub mod record;
pub mod responses;
pub mod score;
