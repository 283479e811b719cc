//! Infrastructure Layer
//!
//! Database implementations, plus an in-memory store behind the `memory` feature.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryAccountRepository;
pub use postgres::PgAccountRepository;
