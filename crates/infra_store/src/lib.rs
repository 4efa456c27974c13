//! Infrastructure Store Layer
//!
//! Provides the in-memory implementation of `PortfolioRepository` and the
//! sample dataset the service starts with.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{sample_store, SeedConfig};
//!
//! let store = sample_store(&SeedConfig::new(today).with_rng_seed(42))?;
//! let repository: Arc<dyn PortfolioRepository> = Arc::new(store);
//! ```

pub mod memory;
pub mod seed;
pub mod error;

pub use memory::{InMemoryStore, StoreBuilder, StoreStats};
pub use seed::{sample_store, SeedConfig, DEFAULT_SEED_DAYS};
pub use error::StoreError;
