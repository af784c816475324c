//! # hs-core
//!
//! Core domain types and error types for the HackSphere portal.
//!
//! This crate provides the foundational types shared across all HackSphere crates:
//! - Entity structs for participants, teams, captured artifacts, and submission receipts
//! - Route, session phase, and portal variant enums (with state machine transitions)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
