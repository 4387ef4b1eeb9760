//! # stylecomb_core
//!
//! Rule engine and file-tree walker for stylecomb.
//!
//! This crate provides:
//! - The `Session` orchestrator and its concurrent file-tree walker
//! - The handler-major `RuleEngine` and its tree walker
//! - The canonical formatting options
//! - Configuration loading and path filtering
//!
//! ## Example
//!
//! ```rust,ignore
//! use stylecomb_core::{Config, Session};
//!
//! let config = Config::from_file(".stylecomb.json")?;
//! let session = Session::new(&config)?;
//! session.run(&paths).await?;
//! println!("{} files processed", session.processed());
//! ```

mod config;
mod engine;
mod error;
mod filter;
mod processor;
pub mod rules;
mod session;

pub use config::Config;
pub use engine::RuleEngine;
pub use error::Error;
pub use filter::PathFilter;
pub use processor::process_document;
pub use session::Session;
