//! Combatant vitals.
//!
//! A [`StatBlock`] is an immutable value: every change produces a new block with
//! the touched field clamped into its valid range. [`StatTemplate`] is the
//! serializable seed used by content catalogs to mint fresh blocks.

mod block;

pub use block::{StatBlock, StatTemplate};
