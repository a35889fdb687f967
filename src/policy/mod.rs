pub mod matcher;
pub mod checker;

// Re-export main types
pub use checker::{evaluate, ComplianceReport, Violation};
