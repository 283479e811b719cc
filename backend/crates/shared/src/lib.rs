//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every back-office crate agrees on:
//! - The unified error type and its HTTP classification
//! - Typed UUID identifiers for persisted entities
//!
//! Only things with one meaning across auth and content belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
