//! Domain Layer - Content entities and persistence interfaces
//!
//! This layer contains:
//! - Domain entities (news, events, gallery, alumni, site profile, slides, uploads)
//! - Drafts: validated input for creating and editing entities
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
