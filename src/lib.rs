//! Bulk loader for SWAPI people.
//!
//! Fetches a range of people from the SWAPI REST API, resolves their film, homeworld, species,
//! starship and vehicle references, flattens every person into a single row and persists the
//! rows in chunks through SeaORM.

pub mod config;
pub mod data;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod service;
pub mod startup;

#[cfg(test)]
mod util;
