pub mod cli;

pub use cli::{NormalizeConfig, SyncConfig};
