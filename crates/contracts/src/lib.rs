//! Shared contracts between the clinic admin dashboard and the backend API.
//!
//! Every type here mirrors a JSON payload of the backend one-to-one. The
//! dashboard holds no authoritative state of its own: it deserializes these
//! records, renders them, and re-fetches after each mutation.

pub mod domain;
pub mod validation;
