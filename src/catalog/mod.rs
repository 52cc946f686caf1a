mod static_works;
mod store;

pub use static_works::{builtin_works, filter_bar_categories, priced_works, StaticWork, ALL_CATEGORY};
pub use store::CatalogStore;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the admin editor form.
pub const CATEGORIES: [&str; 6] = [
    "Веб-дизайн",
    "Графика",
    "Брендинг",
    "Упаковка",
    "Полиграфия",
    "Иллюстрация",
];

/// Gallery images substituted when a draft supplies none.
pub const DEFAULT_IMAGES: [&str; 3] = [
    "/img/d4294912-1ffd-4b03-9114-b04515f0b181.jpg",
    "/img/d9cb1c95-79d7-48bd-8bde-44864c1bbb46.jpg",
    "/img/cb73ccd6-e934-467c-80ab-bf71854bf86a.jpg",
];

pub(crate) fn default_image_set() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One catalog entry managed by the admin editor.
///
/// Serialized in camelCase to stay byte-compatible with the persisted
/// layout under `portfolioItems` / `portfolioData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    /// Set once at creation, immutable thereafter.
    pub created_at: String,
}

/// Form input for creating or updating a [`WorkItem`].
#[derive(Debug, Clone, Default)]
pub struct WorkDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub images: Vec<String>,
}

impl WorkDraft {
    /// Presence check; drafts missing a required field are silently skipped.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.category.is_empty() && !self.description.is_empty()
    }
}

/// The three demo entries the catalog is seeded with on first use.
pub fn seed_items() -> Vec<WorkItem> {
    let now = now_iso();
    vec![
        WorkItem {
            id: 1,
            title: "Премиум Дизайн".to_string(),
            category: "Веб-дизайн".to_string(),
            image: DEFAULT_IMAGES[0].to_string(),
            images: default_image_set(),
            description: "Элегантный веб-дизайн с премиум эстетикой и изысканными деталями."
                .to_string(),
            created_at: now.clone(),
        },
        WorkItem {
            id: 2,
            title: "Арт Проект".to_string(),
            category: "Графика".to_string(),
            image: DEFAULT_IMAGES[2].to_string(),
            images: default_image_set(),
            description: "Креативная графическая работа с утонченным художественным подходом."
                .to_string(),
            created_at: now.clone(),
        },
        WorkItem {
            id: 3,
            title: "Люкс Брендинг".to_string(),
            category: "Брендинг".to_string(),
            image: DEFAULT_IMAGES[1].to_string(),
            images: default_image_set(),
            description: "Роскошная айдентика бренда с изысканными визуальными решениями."
                .to_string(),
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_completeness() {
        let draft = WorkDraft {
            title: "A".to_string(),
            category: "Брендинг".to_string(),
            description: "d".to_string(),
            ..Default::default()
        };
        assert!(draft.is_complete());

        let incomplete = WorkDraft {
            title: "A".to_string(),
            ..Default::default()
        };
        assert!(!incomplete.is_complete());
    }

    #[test]
    fn seed_has_three_entries_with_default_galleries() {
        let seeds = seed_items();
        assert_eq!(seeds.len(), 3);
        for item in &seeds {
            assert_eq!(item.images, default_image_set());
            assert!(!item.title.is_empty());
        }
    }

    #[test]
    fn work_item_serializes_camel_case() {
        let seeds = seed_items();
        let json = serde_json::to_value(&seeds[0]).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
