use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use super::upload::{forward_part, read_file, FilePart};
use crate::error::ApiError;
use crate::export;
use crate::listing;
use crate::middleware::{BearerToken, MaybeToken};
use crate::models::travel_package::{format_travel_month, normalize_boarding_locations};
use crate::models::{Booking, CreateTravelPackagePayload, TravelPackage, UpdateTravelPackagePayload};
use crate::AppState;

/// Shown wherever a booking references a package that no longer exists.
/// Orphaned references are tolerated, never treated as an error.
const PACKAGE_NOT_FOUND: &str = "Pacote não encontrado";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/travel-packages", get(list_travel_packages))
        .route("/travel-packages", post(create_travel_package))
        .route("/travel-packages/{id}", get(get_travel_package))
        .route("/travel-packages/{id}", put(update_travel_package))
        .route("/travel-packages/{id}", delete(delete_travel_package))
        .route("/travel-packages/{id}/files", put(update_travel_package_with_files))
        .route("/travel-packages/{id}/bookings", get(package_bookings))
        .route("/travel-packages/{id}/passengers.csv", get(passengers_csv))
        .route("/travel-packages/{id}/passengers.pdf", get(passengers_pdf))
}

/* ---------- listing ---------- */

/// Deep-linkable list state: `?search=&month=&page=&limit=`.
#[derive(Debug, Deserialize)]
pub struct PackagesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackagesPage {
    travel_packages: Vec<TravelPackage>,
    total_count: usize,
}

// GET /api/travel-packages
async fn list_travel_packages(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Query(params): Query<PackagesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    // widen before multiplying, page is attacker-controlled
    let skip = (page as usize - 1) * limit as usize;

    let all = state.travel_api.list_travel_packages(&token).await?;
    let filtered = listing::filter_packages(
        all,
        params.search.as_deref().unwrap_or_default(),
        params.month.as_deref(),
    );
    let page = listing::page_of(filtered, skip, limit as usize);

    Ok(Json(PackagesPage {
        travel_packages: page.items,
        total_count: page.total_count,
    }))
}

// GET /api/travel-packages/{id}
async fn get_travel_package(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<TravelPackage>, ApiError> {
    Ok(Json(state.travel_api.get_travel_package(&token, &id).await?))
}

/* ---------- create (multipart) ---------- */

/// Text fields of the package form, accumulated while walking the
/// multipart stream.
#[derive(Default)]
struct PackageDraft {
    name: Option<String>,
    price: Option<String>,
    description: Option<String>,
    pdf_url: Option<String>,
    max_people: Option<String>,
    boarding_locations: Vec<String>,
    travel_month: Option<String>,
    travel_date: Option<String>,
    return_date: Option<String>,
    travel_time: Option<String>,
}

impl PackageDraft {
    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = Some(value),
            "price" => self.price = Some(value),
            "description" => self.description = Some(value),
            "pdfUrl" => self.pdf_url = Some(value),
            "maxPeople" => self.max_people = Some(value),
            // repeated field, one entry per boarding location
            "boardingLocations" => self.boarding_locations.push(value),
            "travelMonth" => self.travel_month = Some(value),
            "travelDate" => self.travel_date = Some(value),
            "returnDate" => self.return_date = Some(value),
            "travelTime" => self.travel_time = Some(value),
            other => warn!("ignoring unknown package form field '{}'", other),
        }
    }

    fn into_payload(self) -> Result<CreateTravelPackagePayload, ApiError> {
        let price = self
            .price
            .ok_or_else(|| ApiError::BadRequest("Preço é obrigatório".to_string()))?
            .parse::<f64>()
            .map_err(|_| ApiError::BadRequest("Preço inválido".to_string()))?;
        let max_people = self
            .max_people
            .ok_or_else(|| ApiError::BadRequest("Número máximo de pessoas é obrigatório".to_string()))?
            .parse::<u32>()
            .map_err(|_| ApiError::BadRequest("Número máximo de pessoas inválido".to_string()))?;
        let travel_month = self
            .travel_month
            .ok_or_else(|| ApiError::BadRequest("Mês da viagem é obrigatório".to_string()))?;

        Ok(CreateTravelPackagePayload {
            name: self.name.unwrap_or_default(),
            price,
            description: self.description.unwrap_or_default(),
            pdf_url: self.pdf_url.filter(|u| !u.trim().is_empty()),
            max_people,
            boarding_locations: normalize_boarding_locations(&self.boarding_locations),
            travel_month: format_travel_month(&travel_month),
            travel_date: self.travel_date.filter(|v| !v.is_empty()),
            return_date: self.return_date.filter(|v| !v.is_empty()),
            travel_time: self.travel_time.filter(|v| !v.is_empty()),
        })
    }
}

fn build_package_form(
    payload: &CreateTravelPackagePayload,
    image: FilePart,
    pdf_file: Option<FilePart>,
) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", payload.name.clone())
        .text("price", payload.price.to_string())
        .text("description", payload.description.clone())
        .text("maxPeople", payload.max_people.to_string())
        .text("travelMonth", payload.travel_month.clone());

    if let Some(url) = &payload.pdf_url {
        form = form.text("pdfUrl", url.clone());
    }
    for location in &payload.boarding_locations {
        form = form.text("boardingLocations", location.clone());
    }
    if let Some(date) = &payload.travel_date {
        form = form.text("travelDate", date.clone());
    }
    if let Some(date) = &payload.return_date {
        form = form.text("returnDate", date.clone());
    }
    if let Some(time) = &payload.travel_time {
        form = form.text("travelTime", time.clone());
    }

    form = form.part("image", forward_part(image)?);
    if let Some(pdf) = pdf_file {
        form = form.part("pdfFile", forward_part(pdf)?);
    }
    Ok(form)
}

// POST /api/travel-packages
async fn create_travel_package(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut draft = PackageDraft::default();
    let mut image: Option<FilePart> = None;
    let mut pdf_file: Option<FilePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Formulário multipart inválido: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => image = Some(read_file(field).await?),
            "pdfFile" => pdf_file = Some(read_file(field).await?),
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Campo '{name}' inválido: {e}")))?;
                draft.set(&name, value);
            }
        }
    }

    let payload = draft.into_payload()?;
    payload.validate()?;

    // the itinerary comes either as a hosted URL or as an uploaded file,
    // never both and never neither
    match (&payload.pdf_url, &pdf_file) {
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Informe a URL do PDF ou envie um arquivo PDF".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "Escolha apenas uma forma de envio do roteiro em PDF".to_string(),
            ))
        }
        _ => {}
    }

    let image =
        image.ok_or_else(|| ApiError::BadRequest("Imagem de capa é obrigatória".to_string()))?;
    let form = build_package_form(&payload, image, pdf_file)?;
    let created = state.travel_api.create_travel_package(&token, form).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/* ---------- update ---------- */

// PUT /api/travel-packages/{id}
async fn update_travel_package(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    Json(mut payload): Json<UpdateTravelPackagePayload>,
) -> Result<Json<TravelPackage>, ApiError> {
    payload.validate()?;
    if let Some(locations) = payload.boarding_locations.take() {
        payload.boarding_locations = Some(normalize_boarding_locations(&locations));
    }
    if let Some(month) = payload.travel_month.take() {
        payload.travel_month = Some(format_travel_month(&month));
    }
    let updated = state
        .travel_api
        .update_travel_package(&token, &id, &payload)
        .await?;
    Ok(Json(updated))
}

// PUT /api/travel-packages/{id}/files
//
// File-carrying updates forward the admin form as-is: text fields and
// files alike, no reinterpretation on this side.
async fn update_travel_package_with_files(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<TravelPackage>, ApiError> {
    let mut form = Form::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Formulário multipart inválido: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if field.file_name().is_some() {
            form = form.part(name, forward_part(read_file(field).await?)?);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Campo '{name}' inválido: {e}")))?;
            form = form.text(name, value);
        }
    }

    let updated = state
        .travel_api
        .update_travel_package_with_files(&token, &id, form)
        .await?;
    Ok(Json(updated))
}

// DELETE /api/travel-packages/{id}
async fn delete_travel_package(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if id.is_empty() || id == "undefined" {
        return Err(ApiError::BadRequest("ID do pacote de viagem inválido".to_string()));
    }
    state.travel_api.delete_travel_package(&token, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Pacote de viagem excluído com sucesso" })))
}

/* ---------- passenger list ---------- */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageBookingsResponse {
    package_name: String,
    travel_month: Option<String>,
    bookings: Vec<Booking>,
    total_count: usize,
}

/// All bookings of one package plus the header info for the export views.
async fn load_passengers(
    state: &AppState,
    token: Option<&str>,
    package_id: &str,
) -> Result<(Vec<Booking>, String, Option<String>), ApiError> {
    let all = state.travel_api.list_bookings(token).await?;
    let bookings: Vec<Booking> = all
        .into_iter()
        .filter(|b| b.travel_package_id == package_id)
        .collect();

    let (name, month) = match token {
        Some(token) => match state.travel_api.get_travel_package(token, package_id).await {
            Ok(package) => (package.name, Some(package.travel_month)),
            Err(e) => {
                warn!("package {} lookup failed for passenger list: {}", package_id, e);
                (PACKAGE_NOT_FOUND.to_string(), None)
            }
        },
        None => (PACKAGE_NOT_FOUND.to_string(), None),
    };

    Ok((bookings, name, month))
}

// GET /api/travel-packages/{id}/bookings
async fn package_bookings(
    State(state): State<Arc<AppState>>,
    MaybeToken(token): MaybeToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (bookings, package_name, travel_month) =
        load_passengers(&state, token.as_deref(), &id).await?;
    let total_count = bookings.len();
    Ok(Json(PackageBookingsResponse {
        package_name,
        travel_month,
        bookings,
        total_count,
    }))
}

// GET /api/travel-packages/{id}/passengers.csv
async fn passengers_csv(
    State(state): State<Arc<AppState>>,
    MaybeToken(token): MaybeToken,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let (bookings, _, _) = load_passengers(&state, token.as_deref(), &id).await?;
    if bookings.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let csv = export::passenger_csv(&bookings);
    let filename = export::export_filename("passageiros", "csv");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

// GET /api/travel-packages/{id}/passengers.pdf
async fn passengers_pdf(
    State(state): State<Arc<AppState>>,
    MaybeToken(token): MaybeToken,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let (bookings, package_name, travel_month) =
        load_passengers(&state, token.as_deref(), &id).await?;
    if bookings.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let bytes = export::passenger_pdf(
        &bookings,
        Some(package_name.as_str()),
        travel_month.as_deref(),
    )
    .map_err(ApiError::Internal)?;

    let prefix = format!("passageiros-{}", package_name.replace(['"', '/'], "-"));
    let filename = export::export_filename(&prefix, "pdf");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
