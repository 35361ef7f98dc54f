//! Pure domain logic for the clipcast campaign marketplace.
//!
//! Everything in this crate is synchronous, allocation-light, and free of
//! I/O: lifecycle transition rules, the view estimation and target engines,
//! and the campaign creation wizard. The `db` and `api` crates build on
//! these types; nothing here touches a database or the network.

pub mod campaign;
pub mod error;
pub mod estimation;
pub mod rejection;
pub mod requirements;
pub mod targets;
pub mod types;
pub mod wizard;
