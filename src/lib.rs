//! # Connect Four AI
//!
//! Play Connect Four against a minimax opponent. The engine pairs a mutable
//! board with depth-limited alpha-beta search that explores lines by playing
//! and exactly undoing moves in place; a Ratatui terminal frontend drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, session scores
//! - [`ai`] — Agent seam, minimax search, positional evaluation
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
