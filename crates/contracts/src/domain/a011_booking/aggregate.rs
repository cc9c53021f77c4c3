use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingPeriod {
    #[default]
    Morning,
    Afternoon,
    Night,
}

impl BookingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingPeriod::Morning => "morning",
            BookingPeriod::Afternoon => "afternoon",
            BookingPeriod::Night => "night",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "morning" => Some(BookingPeriod::Morning),
            "afternoon" => Some(BookingPeriod::Afternoon),
            "night" => Some(BookingPeriod::Night),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

/// Reserva de passeio. `total_price` em centavos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub boat_id: i32,
    pub itinerary_id: i32,
    pub marina_id: i32,
    pub date: String,
    pub period: BookingPeriod,
    pub status: BookingStatus,
    pub passenger_count: i32,
    pub total_price: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Booking {
    pub fn new_for_insert(dto: &BookingDto) -> Self {
        let mut aggregate = Self {
            id: 0,
            user_id: 0,
            boat_id: 0,
            itinerary_id: 0,
            marina_id: 0,
            date: String::new(),
            period: BookingPeriod::Morning,
            status: BookingStatus::Pending,
            passenger_count: 0,
            total_price: 0,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: None,
            special_requests: None,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            payment_date: None,
            metadata: EntityMetadata::new(),
        };
        aggregate.update(dto);
        aggregate
    }

    pub fn update(&mut self, dto: &BookingDto) {
        self.user_id = dto.user_id;
        self.boat_id = dto.boat_id;
        self.itinerary_id = dto.itinerary_id;
        self.marina_id = dto.marina_id;
        self.date = dto.date.trim().to_string();
        self.period = dto.period;
        self.status = dto.status;
        self.passenger_count = dto.passenger_count;
        self.total_price = dto.total_price;
        self.customer_name = dto.customer_name.trim().to_string();
        self.customer_email = dto.customer_email.trim().to_string();
        self.customer_phone = normalize_optional(dto.customer_phone.clone());
        self.special_requests = normalize_optional(dto.special_requests.clone());
        self.payment_status = dto.payment_status;
        self.payment_method = normalize_optional(dto.payment_method.clone());
        self.payment_date = normalize_optional(dto.payment_date.clone());
    }

    /// Clients may only touch their bookings while nothing is confirmed yet
    pub fn is_editable_by_client(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for Booking {
    type Dto = BookingDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> BookingDto {
        BookingDto {
            user_id: self.user_id,
            boat_id: self.boat_id,
            itinerary_id: self.itinerary_id,
            marina_id: self.marina_id,
            date: self.date.clone(),
            period: self.period,
            status: self.status,
            passenger_count: self.passenger_count,
            total_price: self.total_price,
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            customer_phone: self.customer_phone.clone(),
            special_requests: self.special_requests.clone(),
            payment_status: self.payment_status,
            payment_method: self.payment_method.clone(),
            payment_date: self.payment_date.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "bookings"
    }

    fn element_name() -> &'static str {
        "Reserva"
    }

    fn list_name() -> &'static str {
        "Reservas"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    /// 0 = "the caller" (filled in by the server)
    #[serde(default)]
    pub user_id: i32,
    pub boat_id: i32,
    pub itinerary_id: i32,
    pub marina_id: i32,
    pub date: String,
    pub period: BookingPeriod,
    #[serde(default)]
    pub status: BookingStatus,
    pub passenger_count: i32,
    pub total_price: i64,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusPatch {
    pub status: BookingStatus,
}

impl Validate for BookingDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.positive_id("boatId", self.boat_id, "Selecione uma embarcação");
        errors.positive_id("itineraryId", self.itinerary_id, "Selecione um roteiro");
        errors.positive_id("marinaId", self.marina_id, "Selecione uma marina");
        if chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err()
            && chrono::DateTime::parse_from_rfc3339(self.date.trim()).is_err()
        {
            errors.push("date", "Data inválida");
        }
        if self.passenger_count < 1 {
            errors.push(
                "passengerCount",
                "Capacidade deve ser de pelo menos 1 passageiro",
            );
        }
        errors.non_negative("totalPrice", self.total_price, "O preço não pode ser negativo");
        errors.require("customerName", &self.customer_name, "Nome é obrigatório");
        errors.require("customerEmail", &self.customer_email, "Email inválido");
        if errors.get("customerEmail").is_none() {
            errors.email("customerEmail", &self.customer_email, "Email inválido");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> BookingDto {
        BookingDto {
            boat_id: 1,
            itinerary_id: 2,
            marina_id: 3,
            date: "2024-12-31".into(),
            period: BookingPeriod::Night,
            passenger_count: 6,
            total_price: 250_000,
            customer_name: "Ana".into(),
            customer_email: "ana@mar.com.br".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_booking() {
        assert!(valid_dto().validate().is_ok());
        let booking = Booking::new_for_insert(&valid_dto());
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.is_editable_by_client());
    }

    #[test]
    fn test_invalid_booking_fields() {
        let dto = BookingDto {
            date: "31/12/2024".into(),
            passenger_count: 0,
            customer_email: "ana".into(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("date"), Some("Data inválida"));
        assert!(errors.get("passengerCount").is_some());
        assert_eq!(errors.get("customerEmail"), Some("Email inválido"));
    }

    #[test]
    fn test_enums_wire_format() {
        let json = serde_json::to_value(valid_dto()).unwrap();
        assert_eq!(json["period"], "night");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["paymentStatus"], "pending");
        let patch: BookingStatusPatch = serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(patch.status, BookingStatus::Cancelled);
    }
}
