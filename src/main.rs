use clap::Parser;
use folio_render::utils::{logger, validation::Validate};
use folio_render::{CliConfig, LocalStorage, PublishPipeline, RenderEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting folio-render CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和發布管道（存儲以工作目錄為根）
    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);

    // 創建渲染引擎並運行
    let engine = RenderEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Publish run completed successfully!");
            tracing::info!("📁 Manifest saved to: {}", output_path);
            println!("✅ Publish run completed successfully!");
            println!("📁 Manifest saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Publish run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                folio_render::utils::error::ErrorSeverity::Low => 0,
                folio_render::utils::error::ErrorSeverity::Medium => 2,
                folio_render::utils::error::ErrorSeverity::High => 1,
                folio_render::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
