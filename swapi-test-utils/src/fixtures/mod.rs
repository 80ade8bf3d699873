//! Test fixture modules for SWAPI payloads and mock HTTP endpoints.

pub mod swapi;
