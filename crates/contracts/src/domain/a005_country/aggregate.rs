use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, Validate, ValidationErrors};

/// País
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Country {
    pub fn new_for_insert(dto: &CountryDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            code: String::new(),
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    /// Код хранится в верхнем регистре ("br" -> "BR")
    pub fn update(&mut self, dto: &CountryDto) {
        self.name = dto.name.trim().to_string();
        self.code = dto.code.trim().to_uppercase();
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Country {
    type Dto = CountryDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> CountryDto {
        CountryDto {
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "countries"
    }

    fn element_name() -> &'static str {
        "País"
    }

    fn list_name() -> &'static str {
        "Países"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub name: String,
    pub code: String,
}

impl Validate for CountryDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome do país é obrigatório");
        errors.min_chars(
            "code",
            &self.code,
            2,
            "Código do país deve ter pelo menos 2 caracteres",
        );
        errors.max_chars(
            "code",
            &self.code,
            3,
            "Código do país deve ter no máximo 3 caracteres",
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, code: &str) -> CountryDto {
        CountryDto {
            name: name.into(),
            code: code.into(),
        }
    }

    #[test]
    fn test_code_length_bounds() {
        assert!(dto("Brasil", "BR").validate().is_ok());
        assert!(dto("Brasil", "BRA").validate().is_ok());
        assert_eq!(
            dto("Brasil", "B").validate().unwrap_err().get("code"),
            Some("Código do país deve ter pelo menos 2 caracteres")
        );
        assert_eq!(
            dto("Brasil", "BRAS").validate().unwrap_err().get("code"),
            Some("Código do país deve ter no máximo 3 caracteres")
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let errors = dto("", "PT").validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Nome do país é obrigatório"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_code_uppercased_on_write() {
        let country = Country::new_for_insert(&dto(" Portugal ", "pt"));
        assert_eq!(country.name, "Portugal");
        assert_eq!(country.code, "PT");
    }
}
