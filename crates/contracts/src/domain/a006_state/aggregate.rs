use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, Validate, ValidationErrors};

/// Estado (belongs to a country)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub country_id: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl State {
    pub fn new_for_insert(dto: &StateDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            code: String::new(),
            country_id: 0,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &StateDto) {
        self.name = dto.name.trim().to_string();
        self.code = dto.code.trim().to_uppercase();
        self.country_id = dto.country_id;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for State {
    type Dto = StateDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> StateDto {
        StateDto {
            name: self.name.clone(),
            code: self.code.clone(),
            country_id: self.country_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "states"
    }

    fn element_name() -> &'static str {
        "Estado"
    }

    fn list_name() -> &'static str {
        "Estados"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    pub name: String,
    pub code: String,
    pub country_id: i32,
}

impl Validate for StateDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome do estado é obrigatório");
        errors.require("code", &self.code, "Sigla do estado é obrigatória");
        errors.positive_id("countryId", self.country_id, "Selecione um país");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_must_be_selected() {
        let dto = StateDto {
            name: "Rio de Janeiro".into(),
            code: "rj".into(),
            country_id: 0,
        };
        assert_eq!(
            dto.validate().unwrap_err().get("countryId"),
            Some("Selecione um país")
        );
        let state = State::new_for_insert(&StateDto { country_id: 1, ..dto });
        assert_eq!(state.code, "RJ");
    }
}
