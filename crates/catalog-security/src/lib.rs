//! # Catalog Security
//! 
//! Bearer token issuing and verification for console requests.

pub mod jwt;

pub use jwt::{Claims, JwtError, JwtService};
