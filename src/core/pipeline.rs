use regex::Regex;
use serde_json::{json, Value};

use crate::core::dispatch::{select_variant, TemplateVariant};
use crate::core::scalar::{DateTimeScalar, JsonScalar, WireScalar};
use crate::domain::model::{PageDocument, PortfolioRecord, RenderResult, RenderedPage};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{FolioError, Result};

pub struct PublishPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PublishPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 將單筆記錄轉成頁面：內容過 JSON 純量邊界、時間戳正規化、
    /// 依判別欄位選變體、組裝區塊、導出對外網址。
    fn render_record(&self, record: &PortfolioRecord) -> Result<RenderedPage> {
        let mut record = record.clone();
        record.content = JsonScalar::parse_value(record.content)?;

        // 無效的時間戳是輸入錯誤，讓整次執行失敗，不能默默補預設值
        let published_at = match &record.published_at {
            Some(wire) => {
                let native = DateTimeScalar::parse_value(wire.clone())?;
                Some(DateTimeScalar::serialize(&native))
            }
            None => None,
        };

        let variant = match self.config.template_override() {
            Some(category) => TemplateVariant::for_category(Some(category)),
            None => select_variant(&record),
        };

        let slug = page_slug(&record.username);
        if slug.is_empty() {
            return Err(FolioError::ValidationError {
                message: format!("record '{}' has no usable username for its URL", record.id),
            });
        }

        let sections = variant.render(&record);
        let display_name = record
            .display_name
            .clone()
            .unwrap_or_else(|| record.username.clone());

        Ok(RenderedPage {
            username: record.username.clone(),
            display_name,
            template: variant.name().to_string(),
            page_url: format!("{}/u/{}", self.config.base_url().trim_end_matches('/'), slug),
            published_at,
            sections,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PublishPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PortfolioRecord>> {
        tracing::debug!("Reading records from: {}", self.config.records_file());
        let bytes = self.storage.read_file(self.config.records_file()).await?;
        let json_data: Value = serde_json::from_slice(&bytes)?;

        // 單筆物件包成陣列處理
        let items = match json_data {
            Value::Array(items) => items,
            single => vec![single],
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(FolioError::from))
            .collect()
    }

    async fn transform(&self, records: Vec<PortfolioRecord>) -> Result<RenderResult> {
        let mut pages = Vec::new();
        let mut documents = Vec::new();
        let formats = self.config.output_formats();

        for record in &records {
            let page = self.render_record(record)?;
            let slug = page_slug(&page.username);

            tracing::debug!(
                "Rendered '{}' with template '{}'",
                page.username,
                page.template
            );

            if formats.iter().any(|f| f == "json") {
                documents.push(PageDocument {
                    filename: format!("{}.json", slug),
                    contents: serde_json::to_string_pretty(&page)?,
                });
            }

            if formats.iter().any(|f| f == "html") {
                documents.push(PageDocument {
                    filename: format!("{}.html", slug),
                    contents: render_html(&page),
                });
            }

            pages.push(page);
        }

        let manifest = json!({
            "base_url": self.config.base_url(),
            "page_count": pages.len(),
            "pages": pages.iter().map(|p| json!({
                "username": p.username,
                "template": p.template,
                "url": p.page_url,
                "published_at": p.published_at,
            })).collect::<Vec<_>>(),
        });

        Ok(RenderResult {
            pages,
            documents,
            manifest: serde_json::to_string_pretty(&manifest)?,
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        tracing::debug!("Writing {} page document(s)", result.documents.len());
        let output_path = self.config.output_path().trim_end_matches('/');

        for doc in &result.documents {
            self.storage
                .write_file(
                    &format!("{}/{}", output_path, doc.filename),
                    doc.contents.as_bytes(),
                )
                .await?;
        }

        let manifest_path = format!("{}/manifest.json", output_path);
        self.storage
            .write_file(&manifest_path, result.manifest.as_bytes())
            .await?;

        Ok(manifest_path)
    }
}

/// 從使用者名稱導出對外網址的 slug
pub fn page_slug(username: &str) -> String {
    let re = Regex::new(r"[^a-z0-9-]+").unwrap();
    let lowered = username.trim().to_lowercase();
    let slug = re.replace_all(&lowered, "-");
    slug.trim_matches('-').to_string()
}

fn render_html(page: &RenderedPage) -> String {
    let mut lines = vec![
        "<!doctype html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{}</title>", escape_html(&page.display_name)),
        "</head>".to_string(),
        format!("<body data-template=\"{}\">", page.template),
    ];

    for section in &page.sections {
        lines.push(format!("<section data-kind=\"{}\">", section.kind));
        lines.push(format!("<h2>{}</h2>", escape_html(&section.title)));
        lines.push(format!(
            "<script type=\"application/json\">{}</script>",
            section.body
        ));
        lines.push("</section>".to_string());
    }

    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
