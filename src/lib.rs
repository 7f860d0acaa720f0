pub mod assets;
pub mod config;
pub mod deepinfra;
pub mod error;
pub mod icons;
pub mod logger;
pub mod models;

pub use assets::{generation_plan, save_image, AssetSpec};
pub use config::Config;
pub use deepinfra::{DeepInfraClient, ImageClient};
pub use error::{AssetGenError, Result};
pub use models::*;
