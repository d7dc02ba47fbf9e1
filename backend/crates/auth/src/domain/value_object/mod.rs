//! Domain Value Objects

pub mod email;
