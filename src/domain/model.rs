use serde::{Deserialize, Serialize};

/// 已發布的作品集記錄，由持久層提供（已通過授權檢查）。
/// 核心只讀取 `template.category` 判別欄位，不驗證完整結構。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub template: Option<TemplateRef>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRef {
    #[serde(default)]
    pub id: Option<String>,
    pub category: String,
}

/// 渲染變體輸出的單一頁面區塊
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub kind: String,
    pub title: String,
    pub body: serde_json::Value,
}

/// 選定變體後組裝出來的頁面
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedPage {
    pub username: String,
    pub display_name: String,
    pub template: String,
    pub page_url: String,
    pub published_at: Option<String>,
    pub sections: Vec<PageSection>,
}

#[derive(Debug, Clone)]
pub struct PageDocument {
    pub filename: String,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub pages: Vec<RenderedPage>,
    pub documents: Vec<PageDocument>,
    pub manifest: String,
}
