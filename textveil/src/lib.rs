// textveil/src/lib.rs
//! # Textveil CLI Application
//!
//! This crate provides the terminal interface for the textveil detection
//! engine: input acquisition (stdin or file), mode selection, and
//! presentation of the rewritten text, similarity score, and entity table.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
