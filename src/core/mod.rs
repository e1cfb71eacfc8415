pub mod color;
pub mod version;
