use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

/// Roteiro, optionally owned by a partner user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub observations: Option<String>,
    pub partner_id: Option<i32>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Itinerary {
    pub fn new_for_insert(dto: &ItineraryDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            description: None,
            observations: None,
            partner_id: None,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &ItineraryDto) {
        self.name = dto.name.trim().to_string();
        self.description = normalize_optional(dto.description.clone());
        self.observations = normalize_optional(dto.observations.clone());
        self.partner_id = dto.partner_id;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Itinerary {
    type Dto = ItineraryDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> ItineraryDto {
        ItineraryDto {
            name: self.name.clone(),
            description: self.description.clone(),
            observations: self.observations.clone(),
            partner_id: self.partner_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "itineraries"
    }

    fn element_name() -> &'static str {
        "Roteiro"
    }

    fn list_name() -> &'static str {
        "Roteiros"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub partner_id: Option<i32>,
}

impl Validate for ItineraryDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.min_chars("name", &self.name, 3, "Nome deve ter pelo menos 3 caracteres");
        if let Some(partner_id) = self.partner_id {
            errors.positive_id("partnerId", partner_id, "Parceiro inválido");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_needs_three_chars() {
        let dto = ItineraryDto {
            name: " Ab ".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("name"),
            Some("Nome deve ter pelo menos 3 caracteres")
        );
        let dto = ItineraryDto {
            name: "Ilha Grande".into(),
            partner_id: Some(4),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
