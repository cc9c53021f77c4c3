use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

/// Marina (место стоянки судов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marina {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Marina {
    pub fn new_for_insert(dto: &MarinaDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            city: None,
            state: None,
            country: None,
            address: None,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            description: None,
            latitude: None,
            longitude: None,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &MarinaDto) {
        self.name = dto.name.trim().to_string();
        self.city = normalize_optional(dto.city.clone());
        self.state = normalize_optional(dto.state.clone());
        self.country = normalize_optional(dto.country.clone());
        self.address = normalize_optional(dto.address.clone());
        self.contact_name = normalize_optional(dto.contact_name.clone());
        self.contact_phone = normalize_optional(dto.contact_phone.clone());
        self.contact_email = normalize_optional(dto.contact_email.clone());
        self.description = normalize_optional(dto.description.clone());
        self.latitude = dto.latitude;
        self.longitude = dto.longitude;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }

    /// "Cidade, UF" for list display
    pub fn location(&self) -> String {
        [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRoot for Marina {
    type Dto = MarinaDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> MarinaDto {
        MarinaDto {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            address: self.address.clone(),
            contact_name: self.contact_name.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_email: self.contact_email.clone(),
            description: self.description.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "marinas"
    }

    fn element_name() -> &'static str {
        "Marina"
    }

    fn list_name() -> &'static str {
        "Marinas"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarinaDto {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Validate for MarinaDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome é obrigatório");
        if let Some(email) = &self.contact_email {
            errors.email("contactEmail", email, "Email inválido");
        }
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                errors.push("latitude", "Latitude deve estar entre -90 e 90");
            }
        }
        if let Some(lng) = self.longitude {
            if !(-180.0..=180.0).contains(&lng) {
                errors.push("longitude", "Longitude deve estar entre -180 e 180");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_email_and_coordinates() {
        let dto = MarinaDto {
            name: "Marina da Glória".into(),
            contact_email: Some("contato".into()),
            latitude: Some(-122.0),
            longitude: Some(-43.17),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("contactEmail"), Some("Email inválido"));
        assert!(errors.get("latitude").is_some());
        assert!(errors.get("longitude").is_none());
    }

    #[test]
    fn test_location_skips_missing_parts() {
        let mut marina = Marina::new_for_insert(&MarinaDto {
            name: "Marina Verolme".into(),
            city: Some("Angra dos Reis".into()),
            ..Default::default()
        });
        assert_eq!(marina.location(), "Angra dos Reis");
        marina.state = Some("RJ".into());
        assert_eq!(marina.location(), "Angra dos Reis, RJ");
    }
}
