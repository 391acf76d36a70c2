use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub static CPF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid CPF regex"));

pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("valid phone regex"));

/// A passenger reservation against a travel package, as the travel API
/// returns it. Immutable once created from the dashboard's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub travel_package_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub full_name: String,
    pub rg: String,
    pub cpf: String,
    /// ISO date or date-time string; exports keep only the date part.
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub boarding_location: String,
    #[serde(rename = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload validated before anything is sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    #[validate(length(min = 1, message = "O pacote de viagem é obrigatório"))]
    pub travel_package_id: String,
    #[validate(length(min = 3, message = "Nome completo deve ter pelo menos 3 caracteres"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "RG é obrigatório"))]
    pub rg: String,
    #[validate(regex(path = *CPF_RE, message = "CPF inválido, formato esperado: 000.000.000-00"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "Data de nascimento é obrigatória"))]
    pub birth_date: String,
    #[validate(regex(
        path = *PHONE_RE,
        message = "Telefone inválido, formato esperado: (00) 00000-0000"
    ))]
    pub phone: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Local de embarque é obrigatório"))]
    pub boarding_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateBookingPayload {
        CreateBookingPayload {
            travel_package_id: "pkg-1".to_string(),
            full_name: "Maria da Silva".to_string(),
            rg: "12.345.678-9".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: "1990-05-12".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "maria@example.com".to_string(),
            boarding_location: "Terminal Tietê".to_string(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn unformatted_cpf_is_rejected() {
        let mut payload = valid_payload();
        payload.cpf = "123456789".to_string();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
    }

    #[test]
    fn eight_digit_phone_is_accepted() {
        let mut payload = valid_payload();
        payload.phone = "(11) 3456-7890".to_string();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn booking_deserializes_from_api_shape() {
        let json = serde_json::json!({
            "id": "b-1",
            "travelPackageId": "pkg-1",
            "fullName": "Maria da Silva",
            "rg": "12.345.678-9",
            "cpf": "123.456.789-00",
            "birthDate": "1990-05-12T00:00:00.000Z",
            "phone": "(11) 98765-4321",
            "email": "maria@example.com",
            "boardingLocation": "Terminal Tietê",
            "created_at": "2024-01-10T12:00:00Z",
            "updated_at": "2024-01-10T12:00:00Z"
        });
        let booking: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(booking.travel_package_id, "pkg-1");
        assert!(booking.created_at.is_some());
    }
}
