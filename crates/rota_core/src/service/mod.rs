//! Core use-case services.
//!
//! # Responsibility
//! - Compose roster, anchor, and scheduler into presentation-facing calls.
//! - Keep presentation decoupled from storage details.

pub mod rota_service;
