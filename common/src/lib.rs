//! Shared models and client-side logic for The Forge.
//!
//! Everything here is plain Rust with no browser dependency so the rules the
//! UI enforces can be exercised by ordinary unit tests:
//!
//! - `model` / `requests`: wire types of the REST API.
//! - `catalog`: material → brand → color resolution of a slot's resources.
//! - `slots`: per-slot working state of the usage wizard.
//! - `wizard`: the four step "Use a Machine" flow.
//! - `outcome`: what to tell the user after submitting a usage.
//! - `status`: derivations for the live machine status board.
//! - `failure`: the "Fail a Machine" report.
//! - `auth`: the credential provider contract.

pub mod auth;
pub mod catalog;
pub mod failure;
pub mod model;
pub mod outcome;
pub mod requests;
pub mod slots;
pub mod status;
pub mod wizard;
