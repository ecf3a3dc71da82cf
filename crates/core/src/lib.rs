//! Core business logic for garrison records.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The three engines of the records system live here, each computing over
//! externally owned storage reached through the traits in [`store`]:
//!
//! # Modules
//!
//! - `ledger` - Service-day balance tracking and debit validation
//! - `visibility` - Unit-scoped visibility resolution and search augmentation
//! - `limiter` - Login-failure tracking with escalating cooldown
//! - `registry` - Declarative record-type configuration (ledger kind + ownership chain)
//! - `store` - Store traits and errors consumed by the engines

pub mod ledger;
pub mod limiter;
pub mod registry;
pub mod store;
pub mod visibility;
