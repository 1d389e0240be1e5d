//! Repository Layer
//!
//! In-memory store plus the source it is seeded from.

mod seed;
mod site_store;
mod traits;

#[cfg(test)]
mod tests;

pub use seed::SeedSource;
pub use site_store::SiteStore;
pub use traits::TaskSource;
