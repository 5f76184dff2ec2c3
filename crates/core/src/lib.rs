//! Domain types and pure logic for the microgrid planner.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod catalog;
pub mod component_types;
pub mod design;
pub mod error;
pub mod filter;
pub mod power;
pub mod specs;
pub mod types;
