pub mod config;
pub mod error;
pub mod license;
pub mod policy;
pub mod output;
pub mod init;

// Re-export main types for easy access
pub use config::{resolve, ConfigSource, EffectiveConfig, ResolvedConfig, DEFAULT_ALLOWED_LICENSES};
pub use error::{ConfigError, ReportError};
pub use license::{parse_license_key, LicenseReport, Package};
pub use policy::{evaluate, ComplianceReport, Violation};
