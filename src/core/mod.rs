//! Core library components.
//!
//! This module contains the token generation, template substitution,
//! password hashing and upload logic shared by the generators.

pub mod apiserver;
pub mod config;
pub mod constants;
pub mod password;
pub mod store;
pub mod template;
pub mod token;
pub mod types;
pub mod validation;
