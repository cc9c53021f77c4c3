use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Hourly,
    Daily,
}

impl PricingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingType::Hourly => "hourly",
            PricingType::Daily => "daily",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hourly" => Some(PricingType::Hourly),
            "daily" => Some(PricingType::Daily),
            _ => None,
        }
    }
}

/// Partner's price table for one boat. Prices are stored in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPrice {
    pub id: i32,
    pub partner_id: i32,
    pub boat_id: i32,
    pub pricing_type: PricingType,
    pub weekday_price: i64,
    pub weekend_price: i64,
    pub holiday_price: i64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl PartnerPrice {
    pub fn new_for_insert(dto: &PartnerPriceDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            partner_id: 0,
            boat_id: 0,
            pricing_type: PricingType::Hourly,
            weekday_price: 0,
            weekend_price: 0,
            holiday_price: 0,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &PartnerPriceDto) {
        self.partner_id = dto.partner_id;
        self.boat_id = dto.boat_id;
        self.pricing_type = dto.pricing_type;
        self.weekday_price = dto.weekday_price;
        self.weekend_price = dto.weekend_price;
        self.holiday_price = dto.holiday_price;
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for PartnerPrice {
    type Dto = PartnerPriceDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> PartnerPriceDto {
        PartnerPriceDto {
            partner_id: self.partner_id,
            boat_id: self.boat_id,
            pricing_type: self.pricing_type,
            weekday_price: self.weekday_price,
            weekend_price: self.weekend_price,
            holiday_price: self.holiday_price,
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "partner-prices"
    }

    fn element_name() -> &'static str {
        "Preço de parceiro"
    }

    fn list_name() -> &'static str {
        "Preços de parceiros"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPriceDto {
    pub partner_id: i32,
    pub boat_id: i32,
    pub pricing_type: PricingType,
    pub weekday_price: i64,
    pub weekend_price: i64,
    pub holiday_price: i64,
}

impl Validate for PartnerPriceDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.positive_id("partnerId", self.partner_id, "Selecione um parceiro");
        errors.positive_id("boatId", self.boat_id, "Selecione uma embarcação");
        errors.non_negative("weekdayPrice", self.weekday_price, "O preço não pode ser negativo");
        errors.non_negative("weekendPrice", self.weekend_price, "O preço não pode ser negativo");
        errors.non_negative("holidayPrice", self.holiday_price, "O preço não pode ser negativo");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_prices_rejected() {
        let dto = PartnerPriceDto {
            partner_id: 2,
            boat_id: 3,
            pricing_type: PricingType::Daily,
            weekday_price: 150_000,
            weekend_price: -1,
            holiday_price: 0,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("weekendPrice"), Some("O preço não pode ser negativo"));
        assert_eq!(
            serde_json::to_value(&dto).unwrap()["pricingType"],
            "daily"
        );
    }
}
