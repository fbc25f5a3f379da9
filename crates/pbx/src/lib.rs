//! In-memory Xcode-style build descriptor.
//!
//! This crate provides [`PbxProject`], a reference implementation of the
//! `ProjectGraph` contract from fontbridge-traits. It models the slice of a
//! native project descriptor the injection pipeline touches: native targets,
//! named groups, file references, and per-target resources build phases.
//!
//! The host build tool normally supplies its own parsed descriptor;
//! `PbxProject` exists so the pipeline can be exercised end-to-end without
//! one, and so tests can assert on registration outcomes.

mod ids;
mod project;

pub use ids::ObjectId;
pub use project::{BuildFile, FileReference, NativeTarget, PbxProject};
