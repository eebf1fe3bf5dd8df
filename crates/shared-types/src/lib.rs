pub mod error;

// Domain modules (canonical locations for all criminal-procedure types)
pub mod catalog;
pub mod common;
pub mod config;
pub mod deadline;
pub mod document;
pub mod liquidation;
pub mod penalty;
pub mod prescription;
pub mod risk;

pub use error::*;

// Re-export all domain types
pub use catalog::*;
pub use common::*;
pub use config::*;
pub use deadline::*;
pub use document::*;
pub use liquidation::*;
pub use penalty::*;
pub use prescription::*;
pub use risk::*;
