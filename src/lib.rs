pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::site_config::SiteConfig;
pub use crate::core::dispatch::{select_variant, TemplateVariant};
pub use crate::core::scalar::{DateTimeScalar, JsonScalar, Literal, WireScalar};
pub use crate::core::{pipeline::PublishPipeline, render::RenderEngine};
pub use utils::error::{FolioError, Result};
