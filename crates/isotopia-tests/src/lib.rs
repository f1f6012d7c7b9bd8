//! Cross-crate test suite for Isotopia.
//!
//! Integration tests that compose the decay models with the plotter the way
//! a caller would, and check the closed-form properties of the curves.

pub mod helpers;
