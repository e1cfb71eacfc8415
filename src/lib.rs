pub mod config;
pub mod core;
pub mod utils;

pub use config::{NormalizeConfig, SyncConfig};
pub use core::color::{hsl_to_hex, hsl_to_rgb, normalize_stylesheet};
pub use core::version::{SemVer, VersionSynchronizer};
pub use utils::error::{Result, ThemeError};
