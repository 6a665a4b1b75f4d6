//! Alphabet definitions for binary-to-text conversion.
//!
//! This module provides the validated, immutable symbol tables that both
//! conversion strategies are parameterized by, plus constructors for the
//! published standard alphabets.

pub mod standard;
mod spec;

pub use spec::{AlphabetSpec, GroupShape, Strategy};
