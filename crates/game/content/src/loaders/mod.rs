//! Data-driven content loaders.
//!
//! Numbers that vary per campaign (the monster roster) can be loaded
//! from RON files instead of the built-in tables. Loaders validate
//! eagerly: a roster that references an unknown ability or passive id
//! fails at load time, not mid-encounter.

mod roster;

pub use roster::{LoadedRoster, RawMonster};
