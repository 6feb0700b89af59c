//! Record store
//!
//! Holds the movie records for the lifetime of the process. Nothing is
//! persisted; the store is rebuilt from the seed dataset on every start.

mod errors;
mod movie_store;
mod seed;

pub use errors::{SeedError, SeedResult, StoreError, StoreResult};
pub use movie_store::MovieStore;
pub use seed::{bundled_seed, load_seed_file, parse_seed, BUNDLED_SEED};
