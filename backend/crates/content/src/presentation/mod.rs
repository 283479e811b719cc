//! Presentation Layer
//!
//! HTTP handlers and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ContentAppState;
pub use router::{admin_router, admin_router_generic, public_router, public_router_generic};
