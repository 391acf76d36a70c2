use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Month name, optionally followed by "/year" ("Janeiro" or "Janeiro/2025").
pub static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ]+(/\d{4})?$").expect("valid month regex"));

/// dd/MM/yyyy, empty allowed (the form sends '' for unset optional dates).
pub static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}/\d{2}/\d{4})?$").expect("valid date regex"));

/// HH:mm 24h, empty allowed.
pub static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([01]\d|2[0-3]):[0-5]\d)?$").expect("valid time regex"));

/// A sellable trip product with capacity, price and schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub pdf_url: String,
    pub max_people: u32,
    pub boarding_locations: Vec<String>,
    pub travel_month: String,
    #[serde(default)]
    pub travel_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub travel_time: Option<String>,
    #[serde(rename = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Fields of a package create, gathered from the multipart form. The PDF
/// itinerary comes either as `pdf_url` or as an uploaded file; the handler
/// enforces that exactly one of the two is present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTravelPackagePayload {
    #[validate(length(min = 3, message = "Nome deve ter pelo menos 3 caracteres"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Preço deve ser um número positivo"))]
    pub price: f64,
    #[validate(length(min = 10, message = "Descrição deve ter pelo menos 10 caracteres"))]
    pub description: String,
    #[validate(url(message = "URL do PDF inválida"))]
    pub pdf_url: Option<String>,
    #[validate(range(min = 1, message = "Número máximo de pessoas deve ser positivo"))]
    pub max_people: u32,
    #[validate(length(min = 1, message = "Pelo menos um local de embarque é necessário"))]
    pub boarding_locations: Vec<String>,
    #[validate(regex(path = *MONTH_RE, message = "Mês da viagem deve conter apenas letras"))]
    pub travel_month: String,
    #[validate(regex(path = *DATE_RE, message = "Data da viagem deve estar no formato dd/mm/aaaa"))]
    pub travel_date: Option<String>,
    #[validate(regex(path = *DATE_RE, message = "Data de retorno deve estar no formato dd/mm/aaaa"))]
    pub return_date: Option<String>,
    #[validate(regex(path = *TIME_RE, message = "Horário deve estar no formato HH:mm"))]
    pub travel_time: Option<String>,
}

/// Partial update sent as JSON when no new files are attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTravelPackagePayload {
    #[validate(length(min = 3, message = "Nome deve ter pelo menos 3 caracteres"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Preço deve ser um número positivo"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[validate(length(min = 10, message = "Descrição deve ter pelo menos 10 caracteres"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(url(message = "URL do PDF inválida"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    /// Tells the API the itinerary stays on the already-uploaded file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pdf_file: Option<bool>,
    #[validate(range(min = 1, message = "Número máximo de pessoas deve ser positivo"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boarding_locations: Option<Vec<String>>,
    #[validate(regex(path = *MONTH_RE, message = "Mês da viagem deve conter apenas letras"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_month: Option<String>,
    #[validate(regex(path = *DATE_RE, message = "Data da viagem deve estar no formato dd/mm/aaaa"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<String>,
    #[validate(regex(path = *DATE_RE, message = "Data de retorno deve estar no formato dd/mm/aaaa"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[validate(regex(path = *TIME_RE, message = "Horário deve estar no formato HH:mm"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
}

/// The API sometimes returns boarding locations as a single comma-joined
/// string, or as array entries that themselves contain commas. Flatten all
/// of that into one trimmed entry per location.
pub fn normalize_boarding_locations<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut locations = Vec::new();
    for entry in raw {
        for part in entry.as_ref().split(',') {
            let part = part.trim();
            if !part.is_empty() {
                locations.push(part.to_string());
            }
        }
    }
    locations
}

/// Ensure the travel month carries a year ("Janeiro" -> "Janeiro/2025").
/// Anything already in "Mês/Ano" form, or unrecognized, passes through.
pub fn format_travel_month(month: &str) -> String {
    static MONTH_ONLY_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ]+$").expect("valid month regex"));

    if MONTH_ONLY_RE.is_match(month) {
        format!("{}/{}", month, Utc::now().year())
    } else {
        month.to_string()
    }
}
