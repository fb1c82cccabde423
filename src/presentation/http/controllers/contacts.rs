use crate::application::{commands::contacts::SubmitContactCommand, dto::ContactReceiptDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Japanese script only (hiragana, katakana, kanji).
    pub name: String,
    /// Full-width characters are accepted and folded.
    pub email: String,
    pub comment: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Enquiry stored.", body = ContactReceiptDto),
        (status = 400, description = "Invalid name, email or comment.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.")
    ),
    security(()),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactReceiptDto>)> {
    state
        .services
        .contact_commands
        .submit(SubmitContactCommand {
            name: payload.name,
            email: payload.email,
            comment: payload.comment,
        })
        .await
        .into_http()
        .map(|receipt| (StatusCode::CREATED, Json(receipt)))
}
