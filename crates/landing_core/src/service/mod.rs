//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the landing page use-cases.
//! - Keep the RPC layer decoupled from storage details.

pub mod landing_service;
