//! Ministream Core Types and Definitions
//!
//! This crate provides the foundational types for the Ministream topology
//! view. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Style**: Node and edge kinds with their visual definitions ([`style`] module)
//! - **Snapshot**: The authoritative topology description ([`snapshot`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod snapshot;
pub mod style;
