use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

/// Default boat categories offered when no boat type records exist yet
pub const DEFAULT_BOAT_TYPES: [&str; 8] = [
    "Superyacht",
    "Yacht",
    "Lancha",
    "Jet ski",
    "Veleiro",
    "Catamarã",
    "Offshore",
    "Outro",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatStatus {
    #[default]
    Active,
    Inactive,
}

impl BoatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoatStatus::Active => "active",
            BoatStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoatStatus::Active => "Ativa",
            BoatStatus::Inactive => "Inativa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(BoatStatus::Active),
            "inactive" => Some(BoatStatus::Inactive),
            _ => None,
        }
    }

    pub fn all() -> [BoatStatus; 2] {
        [BoatStatus::Active, BoatStatus::Inactive]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Embarcação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    pub id: i32,
    pub name: String,
    pub status: BoatStatus,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub passenger_count: i32,
    pub has_sailor: bool,
    pub model: Option<String>,
    pub size: Option<i32>,
    pub marina_id: Option<i32>,
    pub cruise_speed: Option<String>,
    pub allows_overnight: bool,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub fuel: Option<String>,
    pub suites: Option<i32>,
    pub cabins: Option<i32>,
    pub bathrooms: Option<i32>,
    pub tie_document: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Boat {
    pub fn new_for_insert(dto: &BoatDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            name: String::new(),
            status: BoatStatus::Active,
            boat_type: String::new(),
            passenger_count: 0,
            has_sailor: false,
            model: None,
            size: None,
            marina_id: None,
            cruise_speed: None,
            allows_overnight: false,
            country: None,
            state: None,
            city: None,
            fuel: None,
            suites: None,
            cabins: None,
            bathrooms: None,
            tie_document: String::new(),
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &BoatDto) {
        self.name = dto.name.trim().to_string();
        self.status = dto.status;
        self.boat_type = dto.boat_type.trim().to_string();
        self.passenger_count = dto.passenger_count;
        self.has_sailor = dto.has_sailor;
        self.model = normalize_optional(dto.model.clone());
        self.size = dto.size;
        self.marina_id = dto.marina_id;
        self.cruise_speed = normalize_optional(dto.cruise_speed.clone());
        self.allows_overnight = dto.allows_overnight;
        self.country = normalize_optional(dto.country.clone());
        self.state = normalize_optional(dto.state.clone());
        self.city = normalize_optional(dto.city.clone());
        self.fuel = normalize_optional(dto.fuel.clone());
        self.suites = dto.suites;
        self.cabins = dto.cabins;
        self.bathrooms = dto.bathrooms;
        self.tie_document = dto.tie_document.trim().to_string();
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Boat {
    type Dto = BoatDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> BoatDto {
        BoatDto {
            name: self.name.clone(),
            status: self.status,
            boat_type: self.boat_type.clone(),
            passenger_count: self.passenger_count,
            has_sailor: self.has_sailor,
            model: self.model.clone(),
            size: self.size,
            marina_id: self.marina_id,
            cruise_speed: self.cruise_speed.clone(),
            allows_overnight: self.allows_overnight,
            country: self.country.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            fuel: self.fuel.clone(),
            suites: self.suites,
            cabins: self.cabins,
            bathrooms: self.bathrooms,
            tie_document: self.tie_document.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "boats"
    }

    fn element_name() -> &'static str {
        "Embarcação"
    }

    fn list_name() -> &'static str {
        "Embarcações"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatDto {
    pub name: String,
    #[serde(default)]
    pub status: BoatStatus,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub passenger_count: i32,
    #[serde(default)]
    pub has_sailor: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub marina_id: Option<i32>,
    #[serde(default)]
    pub cruise_speed: Option<String>,
    #[serde(default)]
    pub allows_overnight: bool,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub suites: Option<i32>,
    #[serde(default)]
    pub cabins: Option<i32>,
    #[serde(default)]
    pub bathrooms: Option<i32>,
    pub tie_document: String,
}

impl Validate for BoatDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Nome é obrigatório");
        errors.require("type", &self.boat_type, "Tipo é obrigatório");
        if self.passenger_count < 1 {
            errors.push("passengerCount", "Capacidade deve ser de pelo menos 1 passageiro");
        }
        for (field, value) in [
            ("size", self.size),
            ("suites", self.suites),
            ("cabins", self.cabins),
            ("bathrooms", self.bathrooms),
        ] {
            if let Some(v) = value {
                errors.non_negative(field, v as i64, "O valor não pode ser negativo");
            }
        }
        errors.require("tieDocument", &self.tie_document, "Documento TIE é obrigatório");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> BoatDto {
        BoatDto {
            name: "Mar Azul".into(),
            boat_type: "Lancha".into(),
            passenger_count: 12,
            tie_document: "TIE-001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_boat_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_field_scoped_errors() {
        let dto = BoatDto {
            passenger_count: 0,
            cabins: Some(-1),
            tie_document: String::new(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("passengerCount").is_some());
        assert!(errors.get("cabins").is_some());
        assert!(errors.get("tieDocument").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_type_field_is_named_type_on_the_wire() {
        let json = serde_json::to_value(valid_dto()).unwrap();
        assert_eq!(json["type"], "Lancha");
        assert_eq!(json["status"], "active");
        assert_eq!(json["passengerCount"], 12);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(BoatStatus::parse("inactive"), Some(BoatStatus::Inactive));
        assert_eq!(BoatStatus::parse("archived"), None);
        assert_eq!(BoatStatus::Active.label(), "Ativa");
    }
}
