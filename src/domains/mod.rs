//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! dashboard backend, following Domain-Driven Design principles for better
//! organization and scalability.

pub mod servers;
pub mod tools;
