//! Chatmark Core
//!
//! This crate provides the document model and error definitions
//! shared by the chatmark parser, configuration and renderers.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`], [`InlineRun`], [`RunStyle`] - The parsed document model
//! - [`Document`] - An ordered block sequence produced by one parse call
//! - [`OutputFormat`] - The output formats understood by the CLI
//! - [`ChatmarkError`] - Error types

pub mod block;
pub mod document;
pub mod enums;
pub mod error;

pub use block::{Block, InlineRun, RunStyle};
pub use document::Document;
pub use enums::OutputFormat;
pub use error::{ChatmarkError, Result};
