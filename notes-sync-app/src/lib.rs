//! Notes Sync application layer
//!
//! ## 架构
//!
//! Follows the Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: events fed into the loop (`message/`)
//! - **Update**: the reducer, the only place that mutates the model (`update/`)
//! - **Command**: side effects returned by the reducer and run by the shell (`command/`)
//! - **Backend**: storage adapters (`backend/`)
//!
//! ```text
//!   AppMessage ──▶ update(&mut App) ──▶ Command ──▶ CommandExecutor
//!       ▲                                               │ tokio task
//!       └──────────────── mpsc channel ◀────────────────┘
//! ```
//!
//! `app::run` owns the model and pulls one message at a time off the
//! channel, so every state change is serialized even though storage calls
//! complete concurrently and out of order.

pub mod app;
pub mod backend;
pub mod command;
pub mod config;
pub mod message;
pub mod model;
pub mod update;
