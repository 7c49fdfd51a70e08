//! Application services

pub mod sessions;
