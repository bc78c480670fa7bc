//! Authentication primitives: password hashing, token issue/verify, and the
//! credential-check login flow used by the token endpoint.

pub mod password;
pub mod service;
pub mod token;
