//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate shared DTOs and path/query parameters into domain commands and
//! map results and errors back into JSON responses.

pub mod rest;
