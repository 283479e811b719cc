//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, random bytes)
//! - HS256 JSON Web Tokens
//! - Password hashing (Argon2id)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod jwt;
pub mod password;
