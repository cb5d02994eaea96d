//! Backend library modules.
//!
//! Hexagonal layout: `domain` holds entities, errors, and ports; `inbound`
//! adapts HTTP onto the domain; `outbound` implements the ports against
//! PostgreSQL via Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
