//! Core types and definitions for the GRAVWELL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, frame snapshots, events, constants and the
//! session configuration. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
