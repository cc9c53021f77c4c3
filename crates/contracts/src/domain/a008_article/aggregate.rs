use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Artigo do blog.
///
/// Lifecycle flags:
/// - `enabled`: visible on the public site when not a draft;
/// - `is_draft`: work in progress;
/// - `is_deleted`: moved to the trash (soft delete), restorable until the
///   permanent delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub path: String,
    pub author: String,
    pub description: String,
    pub paragraphs: Vec<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub tags: Vec<String>,
    pub publication_date: Option<String>,
    pub enabled: bool,
    pub is_draft: bool,
    pub is_deleted: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Article {
    pub fn new_for_insert(dto: &ArticleDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            title: String::new(),
            path: String::new(),
            author: String::new(),
            description: String::new(),
            paragraphs: Vec::new(),
            image: None,
            caption: None,
            tags: Vec::new(),
            publication_date: None,
            enabled: true,
            is_draft: false,
            is_deleted: false,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &ArticleDto) {
        self.title = dto.title.trim().to_string();
        self.path = dto.path.trim().to_string();
        self.author = dto.author.trim().to_string();
        self.description = dto.description.trim().to_string();
        self.paragraphs = dto.paragraphs.iter().map(|p| p.trim().to_string()).collect();
        self.image = normalize_optional(dto.image.clone());
        self.caption = normalize_optional(dto.caption.clone());
        self.tags = dto.tags.iter().map(|t| t.trim().to_string()).collect();
        self.publication_date = normalize_optional(dto.publication_date.clone());
        self.enabled = dto.enabled;
        self.is_draft = dto.is_draft;
    }

    pub fn set_status(&mut self, field: ArticleStatusField, value: bool) {
        match field {
            ArticleStatusField::Enabled => self.enabled = value,
            ArticleStatusField::IsDraft => self.is_draft = value,
            ArticleStatusField::IsDeleted => self.is_deleted = value,
        }
    }

    /// Published articles are the only ones the public site may serve
    pub fn is_published(&self) -> bool {
        ArticleTab::Published.matches(self)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_deleted {
            "Lixeira"
        } else if self.is_draft {
            "Rascunho"
        } else if self.enabled {
            "Publicado"
        } else {
            "Desativado"
        }
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Article {
    type Dto = ArticleDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> ArticleDto {
        ArticleDto {
            title: self.title.clone(),
            path: self.path.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            paragraphs: self.paragraphs.clone(),
            image: self.image.clone(),
            caption: self.caption.clone(),
            tags: self.tags.clone(),
            publication_date: self.publication_date.clone(),
            enabled: self.enabled,
            is_draft: self.is_draft,
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "articles"
    }

    fn element_name() -> &'static str {
        "Artigo"
    }

    fn list_name() -> &'static str {
        "Artigos"
    }
}

// ============================================================================
// Status / tabs
// ============================================================================

/// Flag addressed by `PATCH /api/articles/:id/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleStatusField {
    #[serde(rename = "enabled")]
    Enabled,
    #[serde(rename = "isDraft")]
    IsDraft,
    #[serde(rename = "isDeleted")]
    IsDeleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStatusPatch {
    pub field: ArticleStatusField,
    pub value: bool,
}

/// Вкладки списка статей
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArticleTab {
    #[default]
    All,
    Published,
    Drafts,
    Disabled,
    Trash,
}

impl ArticleTab {
    pub fn all() -> [ArticleTab; 5] {
        [
            ArticleTab::All,
            ArticleTab::Published,
            ArticleTab::Drafts,
            ArticleTab::Disabled,
            ArticleTab::Trash,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleTab::All => "Todos",
            ArticleTab::Published => "Publicados",
            ArticleTab::Drafts => "Rascunhos",
            ArticleTab::Disabled => "Desativados",
            ArticleTab::Trash => "Lixeira",
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            ArticleTab::All => true,
            ArticleTab::Published => article.enabled && !article.is_draft && !article.is_deleted,
            ArticleTab::Drafts => article.is_draft && !article.is_deleted,
            ArticleTab::Disabled => !article.enabled && !article.is_draft && !article.is_deleted,
            ArticleTab::Trash => article.is_deleted,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub title: String,
    pub path: String,
    pub author: String,
    pub description: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub is_draft: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ArticleDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            path: String::new(),
            author: String::new(),
            description: String::new(),
            paragraphs: Vec::new(),
            image: None,
            caption: None,
            tags: Vec::new(),
            publication_date: None,
            enabled: true,
            is_draft: false,
        }
    }
}

/// `^[a-z0-9-]+$`
pub fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Comma separated input -> tag list (blank entries dropped)
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Paragraphs are separated by blank lines in the editor
pub fn split_paragraphs(input: &str) -> Vec<String> {
    input
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl Validate for ArticleDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.min_chars("title", &self.title, 3, "O título deve ter pelo menos 3 caracteres");
        errors.min_chars("path", &self.path, 3, "O caminho deve ter pelo menos 3 caracteres");
        if errors.get("path").is_none() && !is_valid_path(self.path.trim()) {
            errors.push(
                "path",
                "O caminho deve conter apenas letras minúsculas, números e hífens",
            );
        }
        errors.min_chars(
            "author",
            &self.author,
            3,
            "O nome do autor deve ter pelo menos 3 caracteres",
        );
        errors.min_chars(
            "description",
            &self.description,
            10,
            "A descrição deve ter pelo menos 10 caracteres",
        );
        if self.paragraphs.is_empty() {
            errors.push("paragraphs", "O artigo deve ter pelo menos um parágrafo");
        } else if self.paragraphs.iter().any(|p| p.trim().is_empty()) {
            errors.push("paragraphs", "O parágrafo não pode estar vazio");
        }
        if self.tags.iter().all(|t| t.trim().is_empty()) {
            errors.push("tags", "Adicione pelo menos uma tag");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ArticleDto {
        ArticleDto {
            title: "Roteiros em Angra".into(),
            path: "roteiros-em-angra-2024".into(),
            author: "Equipe".into(),
            description: "Os melhores roteiros de lancha".into(),
            paragraphs: vec!["Primeiro parágrafo".into()],
            tags: vec!["angra".into()],
            ..Default::default()
        }
    }

    fn article(enabled: bool, is_draft: bool, is_deleted: bool) -> Article {
        let mut a = Article::new_for_insert(&valid_dto());
        a.enabled = enabled;
        a.is_draft = is_draft;
        a.is_deleted = is_deleted;
        a
    }

    #[test]
    fn test_valid_article_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_path_pattern() {
        assert!(is_valid_path("abc-123"));
        assert!(!is_valid_path("Abc"));
        assert!(!is_valid_path("com espaço"));
        assert!(!is_valid_path("a_b"));
        let dto = ArticleDto {
            path: "Meu-Artigo".into(),
            ..valid_dto()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("path"),
            Some("O caminho deve conter apenas letras minúsculas, números e hífens")
        );
    }

    #[test]
    fn test_paragraphs_and_tags_required() {
        let dto = ArticleDto {
            paragraphs: vec![],
            tags: vec!["  ".into()],
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.get("paragraphs"),
            Some("O artigo deve ter pelo menos um parágrafo")
        );
        assert_eq!(errors.get("tags"), Some("Adicione pelo menos uma tag"));

        let dto = ArticleDto {
            paragraphs: vec!["ok".into(), " ".into()],
            ..valid_dto()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("paragraphs"),
            Some("O parágrafo não pode estar vazio")
        );
    }

    #[test]
    fn test_tabs_partition_live_articles() {
        let published = article(true, false, false);
        let draft = article(true, true, false);
        let disabled = article(false, false, false);
        let trashed = article(true, false, true);

        assert!(ArticleTab::Published.matches(&published));
        assert!(!ArticleTab::Published.matches(&draft));
        assert!(ArticleTab::Drafts.matches(&draft));
        assert!(ArticleTab::Disabled.matches(&disabled));
        assert!(!ArticleTab::Disabled.matches(&draft));
        assert!(ArticleTab::Trash.matches(&trashed));
        assert!(!ArticleTab::Published.matches(&trashed));
        for a in [&published, &draft, &disabled, &trashed] {
            assert!(ArticleTab::All.matches(a));
        }
        assert_eq!(trashed.status_label(), "Lixeira");
        assert_eq!(disabled.status_label(), "Desativado");
    }

    #[test]
    fn test_status_patch_wire_format() {
        let patch: ArticleStatusPatch =
            serde_json::from_str(r#"{"field":"isDeleted","value":true}"#).unwrap();
        assert_eq!(patch.field, ArticleStatusField::IsDeleted);
        let mut a = article(true, false, false);
        a.set_status(patch.field, patch.value);
        assert!(a.is_deleted);
        assert!(serde_json::from_str::<ArticleStatusPatch>(r#"{"field":"title","value":true}"#).is_err());
    }

    #[test]
    fn test_editor_helpers() {
        assert_eq!(split_tags("mar, , lancha ,"), vec!["mar", "lancha"]);
        assert_eq!(
            split_paragraphs("Um\r\n\r\nDois\n\n\n\nTrês"),
            vec!["Um", "Dois", "Três"]
        );
    }
}
