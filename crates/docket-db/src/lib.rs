//! Read-side persistence for the authorization engine.
//!
//! Case, document and client records are owned by the surrounding application;
//! this crate only reads the assignment fields that access checks depend on.

pub mod db;
pub mod error;
pub mod model;
