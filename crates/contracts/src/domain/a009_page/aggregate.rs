use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};
use crate::domain::a008_article::aggregate::is_valid_path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(PageStatus::Draft),
            "published" => Some(PageStatus::Published),
            "archived" => Some(PageStatus::Archived),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageStatus::Draft => "Rascunho",
            PageStatus::Published => "Publicada",
            PageStatus::Archived => "Arquivada",
        }
    }
}

/// Página institucional com campos de SEO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub slug: String,
    pub canonical_url: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: PageStatus,
    pub published_at: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Page {
    pub fn new_for_insert(dto: &PageDto, author_id: Option<i32>) -> Self {
        let mut aggregate = Self {
            id: 0,
            title: String::new(),
            description: None,
            content: None,
            slug: String::new(),
            canonical_url: None,
            image_url: None,
            image_alt: None,
            meta_title: None,
            meta_description: None,
            status: PageStatus::Draft,
            published_at: None,
            created_by: author_id,
            updated_by: author_id,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto, author_id);
        aggregate
    }

    pub fn update(&mut self, dto: &PageDto, editor_id: Option<i32>) {
        self.title = dto.title.trim().to_string();
        self.description = normalize_optional(dto.description.clone());
        self.content = normalize_optional(dto.content.clone());
        self.slug = dto.slug.trim().to_string();
        self.canonical_url = normalize_optional(dto.canonical_url.clone());
        self.image_url = normalize_optional(dto.image_url.clone());
        self.image_alt = normalize_optional(dto.image_alt.clone());
        self.meta_title = normalize_optional(dto.meta_title.clone());
        self.meta_description = normalize_optional(dto.meta_description.clone());
        self.set_status(dto.status);
        self.updated_by = editor_id;
    }

    /// `published_at` is stamped the first time the page goes live
    pub fn set_status(&mut self, status: PageStatus) {
        if status == PageStatus::Published && self.published_at.is_none() {
            self.published_at = Some(chrono::Utc::now().to_rfc3339());
        }
        self.status = status;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Page {
    type Dto = PageDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> PageDto {
        PageDto {
            title: self.title.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            slug: self.slug.clone(),
            canonical_url: self.canonical_url.clone(),
            image_url: self.image_url.clone(),
            image_alt: self.image_alt.clone(),
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "pages"
    }

    fn element_name() -> &'static str {
        "Página"
    }

    fn list_name() -> &'static str {
        "Páginas"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub status: PageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStatusPatch {
    pub status: PageStatus,
}

impl Validate for PageDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "Título é obrigatório");
        errors.require("slug", &self.slug, "Slug é obrigatório");
        if errors.get("slug").is_none() && !is_valid_path(self.slug.trim()) {
            errors.push(
                "slug",
                "O slug deve conter apenas letras minúsculas, números e hífens",
            );
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_stamps_once() {
        let dto = PageDto {
            title: "Sobre".into(),
            slug: "sobre".into(),
            ..Default::default()
        };
        let mut page = Page::new_for_insert(&dto, Some(1));
        assert_eq!(page.status, PageStatus::Draft);
        assert!(page.published_at.is_none());

        page.set_status(PageStatus::Published);
        let first = page.published_at.clone();
        assert!(first.is_some());
        page.set_status(PageStatus::Archived);
        page.set_status(PageStatus::Published);
        assert_eq!(page.published_at, first);
    }

    #[test]
    fn test_slug_rules() {
        let dto = PageDto {
            title: "Sobre".into(),
            slug: "Sobre Nós".into(),
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().get("slug").is_some());
    }
}
