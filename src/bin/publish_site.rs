use clap::Parser;
use folio_render::config::site_config::SiteConfig;
use folio_render::utils::{logger, validation::Validate};
use folio_render::{LocalStorage, PublishPipeline, RenderEngine};

#[derive(Parser)]
#[command(name = "publish-site")]
#[command(about = "Publish a portfolio site from a TOML site configuration")]
struct Args {
    /// Path to TOML site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the template category for every record
    #[arg(long)]
    template: Option<String>,

    /// Dry run - show what would be published without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting site publish tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(template) = args.template.clone() {
        tracing::info!("🔧 Template override: {}", template);
        config.render.template_override = Some(template);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No pages will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    // 創建存儲和發布管道（存儲以工作目錄為根）
    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);

    // 創建渲染引擎並運行
    let engine = RenderEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site published successfully!");
            tracing::info!("📁 Manifest saved to: {}", output_path);
            println!("✅ Site published successfully!");
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

fn display_config_summary(config: &SiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site.name);
    println!("  Base URL: {}", config.site.base_url);
    println!("  Records: {}", config.source.records_file);
    println!("  Output: {}", config.publish.output_path);
    println!("  Formats: {}", config.render.output_formats.join(", "));

    if let Some(template) = &config.render.template_override {
        println!("  Template Override: {}", template);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SiteConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Record Source:");
    println!("  File: {}", config.source.records_file);

    println!();
    println!("⚙️ Rendering:");
    match &config.render.template_override {
        Some(template) => {
            println!("  🔧 Every record will be forced to template '{}'", template);
        }
        None => {
            println!("  📊 Template chosen per record from its category");
            println!("  📊 Unknown categories fall back to 'general'");
        }
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.publish.output_path);
    println!("  Formats: {}", config.render.output_formats.join(", "));
    println!(
        "  Page URLs: {}/u/<username>",
        config.site.base_url.trim_end_matches('/')
    );

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
