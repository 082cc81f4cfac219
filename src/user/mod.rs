//! User module
//!
//! Creation and listing of user records.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
