//! Utilities shared by the unit tests of the crate.

pub mod test;
