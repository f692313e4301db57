pub mod dispatch;
pub mod pipeline;
pub mod render;
pub mod scalar;

pub use crate::domain::model::{PageSection, PortfolioRecord, RenderResult, RenderedPage};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
