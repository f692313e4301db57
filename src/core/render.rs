use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting publish run");

        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} portfolio record(s)", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!("Rendered {} page(s)", result.pages.len());

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
