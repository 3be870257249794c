//! # Blog Fixtures
//!
//! Random blog post generation for seeding test and demo databases.
//! The generator takes an injected random source so seeded runs are replayable.

mod generator;

pub use generator::{FIRST_NAMES, LAST_NAMES, PostGenerator, SEED_BATCH_SIZE};
