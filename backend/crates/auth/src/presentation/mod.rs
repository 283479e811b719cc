//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the route guard.

pub mod account_handlers;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentAccount, GuardState, RouteGuard, route_guard, with_route_guard};
pub use router::{accounts_router, accounts_router_generic, auth_router, auth_router_generic};
