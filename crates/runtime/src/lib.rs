//! Session and statistics runtime for the guessing game.
//!
//! This crate owns every piece of mutable game state. Consumers embed
//! [`GameRuntime`], which combines the read-only dataset with the two stores:
//!
//! - [`repository::SessionStore`] tracks the game each player has in progress
//! - [`repository::StatsStore`] accumulates lifetime outcomes per player
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the façade and its builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the lock-guarded in-memory stores
pub mod api;
pub mod repository;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use repository::{SessionStore, StatsStore};
pub use runtime::{GameRuntime, GameRuntimeBuilder};
