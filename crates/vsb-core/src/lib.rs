#![forbid(unsafe_code)]

//! Core contracts for the vertical seek bar toolkit.
//!
//! This crate holds the primitives a widget consumes from its host:
//! pixel-space geometry, pointer events, and the measurement protocol.
//! It has no rendering or widget logic of its own.

pub mod event;
pub mod geometry;
pub mod measure;
