//! HTTP handlers

pub mod dish;
pub mod matching;
pub mod mixing;
pub mod sessions;
