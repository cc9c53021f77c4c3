use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тип судна (справочник, имя уникально)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl BoatType {
    /// Создать новую запись для вставки в БД (id назначит БД)
    pub fn new_for_insert(dto: &BoatTypeDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            description: None,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &BoatTypeDto) {
        self.name = dto.name.trim().to_string();
        self.description = normalize_optional(dto.description.clone());
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for BoatType {
    type Dto = BoatTypeDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> BoatTypeDto {
        BoatTypeDto {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "boat-types"
    }

    fn element_name() -> &'static str {
        "Tipo de embarcação"
    }

    fn list_name() -> &'static str {
        "Tipos de embarcação"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatTypeDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for BoatTypeDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome é obrigatório");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        let dto = BoatTypeDto {
            name: "  ".into(),
            description: None,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_insert_trims_and_drops_blank_description() {
        let dto = BoatTypeDto {
            name: " Catamarã ".into(),
            description: Some("   ".into()),
        };
        let aggregate = BoatType::new_for_insert(&dto);
        assert_eq!(aggregate.name, "Catamarã");
        assert_eq!(aggregate.description, None);
        assert_eq!(BoatType::table_name(), "a001_boat_types");
        assert_eq!(BoatType::api_path(), "/api/boat-types");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let aggregate = BoatType::new_for_insert(&BoatTypeDto {
            name: "Lancha".into(),
            description: None,
        });
        let json = serde_json::to_value(&aggregate).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["name"], "Lancha");
    }
}
