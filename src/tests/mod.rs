//! tests/mod.rs
pub mod chat_tests;
