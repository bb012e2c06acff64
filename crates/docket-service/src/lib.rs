//! Authorization engine for the docket legal back office.
//!
//! Route handlers combine a class-level check ("may this role ever do X")
//! with an instance-level check ("may this user touch this record"); both
//! live under [`auth`].

pub mod auth;
pub mod error;
