use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, Validate, ValidationErrors};

/// Cidade (belongs to a state)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl City {
    pub fn new_for_insert(dto: &CityDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            state_id: 0,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &CityDto) {
        self.name = dto.name.trim().to_string();
        self.state_id = dto.state_id;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for City {
    type Dto = CityDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> CityDto {
        CityDto {
            name: self.name.clone(),
            state_id: self.state_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "cities"
    }

    fn element_name() -> &'static str {
        "Cidade"
    }

    fn list_name() -> &'static str {
        "Cidades"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub name: String,
    pub state_id: i32,
}

impl Validate for CityDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome da cidade é obrigatório");
        errors.positive_id("stateId", self.state_id, "Selecione um estado");
        errors.into_result()
    }
}
