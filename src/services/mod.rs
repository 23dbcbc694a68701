// src/services/mod.rs
pub mod inference;
