//! Ready-made card sets.

pub mod classic;
