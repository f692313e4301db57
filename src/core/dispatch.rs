use serde_json::{json, Value};

use crate::domain::model::{PageSection, PortfolioRecord};

/// 封閉的呈現變體集合。一筆記錄每次渲染恰好選中一個變體，
/// 無法識別的類別不是錯誤，一律走 General。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    Engineer,
    Marketer,
    Designer,
    Photographer,
    General,
}

/// 讀取記錄的 `template.category` 判別欄位並選出變體。
/// 純函式：相同判別值永遠得到相同變體。
pub fn select_variant(record: &PortfolioRecord) -> TemplateVariant {
    TemplateVariant::for_category(record.template.as_ref().map(|t| t.category.as_str()))
}

impl TemplateVariant {
    /// 類別對照表。已知類別依表匹配，其餘（未知、空字串、缺欄位）
    /// 無條件落到 General 的預設分支。
    pub fn for_category(category: Option<&str>) -> Self {
        match category {
            Some("engineer") => TemplateVariant::Engineer,
            Some("marketer") => TemplateVariant::Marketer,
            Some("designer") => TemplateVariant::Designer,
            Some("photographer") => TemplateVariant::Photographer,
            _ => TemplateVariant::General,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateVariant::Engineer => "engineer",
            TemplateVariant::Marketer => "marketer",
            TemplateVariant::Designer => "designer",
            TemplateVariant::Photographer => "photographer",
            TemplateVariant::General => "general",
        }
    }

    /// 每個變體的區塊順序：內容欄位 → 區塊標題。
    /// 工程師先放專案與技能、攝影師先放作品集、General 用中性排序。
    fn section_plan(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TemplateVariant::Engineer => &[
                ("bio", "About"),
                ("projects", "Projects"),
                ("skills", "Skills"),
                ("experience", "Experience"),
                ("contact", "Contact"),
            ],
            TemplateVariant::Marketer => &[
                ("bio", "About"),
                ("highlights", "Highlights"),
                ("campaigns", "Campaigns"),
                ("clients", "Clients"),
                ("contact", "Contact"),
            ],
            TemplateVariant::Designer => &[
                ("bio", "About"),
                ("gallery", "Selected Work"),
                ("projects", "Case Studies"),
                ("contact", "Contact"),
            ],
            TemplateVariant::Photographer => &[
                ("gallery", "Portfolio"),
                ("bio", "About"),
                ("contact", "Contact"),
            ],
            TemplateVariant::General => &[
                ("bio", "About"),
                ("projects", "Projects"),
                ("skills", "Skills"),
                ("gallery", "Gallery"),
                ("contact", "Contact"),
            ],
        }
    }

    /// 以同一份記錄合約組裝頁面區塊。只收錄記錄內容裡實際存在的欄位。
    pub fn render(&self, record: &PortfolioRecord) -> Vec<PageSection> {
        let mut sections = vec![hero_section(record)];

        for (key, title) in self.section_plan() {
            if let Some(body) = record.content.get(*key) {
                sections.push(PageSection {
                    kind: (*key).to_string(),
                    title: (*title).to_string(),
                    body: body.clone(),
                });
            }
        }

        sections
    }
}

fn hero_section(record: &PortfolioRecord) -> PageSection {
    let display_name = record
        .display_name
        .clone()
        .unwrap_or_else(|| record.username.clone());

    let headline = record
        .content
        .get("headline")
        .cloned()
        .unwrap_or(Value::Null);

    PageSection {
        kind: "hero".to_string(),
        title: display_name.clone(),
        body: json!({
            "display_name": display_name,
            "headline": headline,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TemplateRef;

    fn record_with_category(category: Option<&str>) -> PortfolioRecord {
        PortfolioRecord {
            id: "p-1".to_string(),
            username: "casey".to_string(),
            display_name: Some("Casey Lin".to_string()),
            template: category.map(|c| TemplateRef {
                id: Some("t-1".to_string()),
                category: c.to_string(),
            }),
            published_at: None,
            content: json!({
                "bio": "I build things.",
                "projects": [{"name": "folio"}],
                "skills": ["rust"],
                "gallery": [{"src": "a.jpg"}],
                "contact": {"email": "casey@example.com"}
            }),
        }
    }

    #[test]
    fn test_known_categories_map_to_their_variants() {
        assert_eq!(
            select_variant(&record_with_category(Some("engineer"))),
            TemplateVariant::Engineer
        );
        assert_eq!(
            select_variant(&record_with_category(Some("marketer"))),
            TemplateVariant::Marketer
        );
        assert_eq!(
            select_variant(&record_with_category(Some("designer"))),
            TemplateVariant::Designer
        );
        assert_eq!(
            select_variant(&record_with_category(Some("photographer"))),
            TemplateVariant::Photographer
        );
    }

    #[test]
    fn test_dispatch_is_total() {
        // 空字串、未知類別、缺 template 都必須得到變體，不得失敗
        assert_eq!(
            select_variant(&record_with_category(Some(""))),
            TemplateVariant::General
        );
        assert_eq!(
            select_variant(&record_with_category(Some("unknown-xyz"))),
            TemplateVariant::General
        );
        assert_eq!(
            select_variant(&record_with_category(None)),
            TemplateVariant::General
        );
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let record = record_with_category(Some("marketer"));
        let first = select_variant(&record);
        for _ in 0..10 {
            assert_eq!(select_variant(&record), first);
        }
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        assert_eq!(
            select_variant(&record_with_category(Some("Engineer"))),
            TemplateVariant::General
        );
    }

    #[test]
    fn test_render_starts_with_hero() {
        let record = record_with_category(Some("engineer"));
        let sections = TemplateVariant::Engineer.render(&record);
        assert_eq!(sections[0].kind, "hero");
        assert_eq!(sections[0].title, "Casey Lin");
    }

    #[test]
    fn test_hero_falls_back_to_username() {
        let mut record = record_with_category(Some("engineer"));
        record.display_name = None;
        let sections = TemplateVariant::Engineer.render(&record);
        assert_eq!(sections[0].title, "casey");
    }

    #[test]
    fn test_photographer_leads_with_gallery() {
        let record = record_with_category(Some("photographer"));
        let sections = TemplateVariant::Photographer.render(&record);
        assert_eq!(sections[1].kind, "gallery");
        assert_eq!(sections[1].title, "Portfolio");
    }

    #[test]
    fn test_engineer_orders_projects_before_skills() {
        let record = record_with_category(Some("engineer"));
        let sections = TemplateVariant::Engineer.render(&record);
        let kinds: Vec<&str> = sections.iter().map(|s| s.kind.as_str()).collect();
        let projects = kinds.iter().position(|k| *k == "projects").unwrap();
        let skills = kinds.iter().position(|k| *k == "skills").unwrap();
        assert!(projects < skills);
    }

    #[test]
    fn test_render_skips_missing_content_fields() {
        let mut record = record_with_category(Some("marketer"));
        record.content = json!({"bio": "Growth person."});
        let sections = TemplateVariant::Marketer.render(&record);
        let kinds: Vec<&str> = sections.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, vec!["hero", "bio"]);
    }

    #[test]
    fn test_general_renders_for_unrecognized_category() {
        let record = record_with_category(Some("unknown-xyz"));
        let variant = select_variant(&record);
        assert_eq!(variant, TemplateVariant::General);
        assert_eq!(variant.name(), "general");
        assert!(!variant.render(&record).is_empty());
    }
}
