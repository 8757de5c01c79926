use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum digits a phone number must carry after trimming. The backend does
/// its own validation; this only gates obviously incomplete input.
pub const MIN_PHONE_LEN: usize = 8;

/// The booking payload, camelCase on the wire for both transports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    #[serde(rename = "patientFullName")]
    pub patient_full_name: String,
    #[serde(rename = "dateHourRequest")]
    pub date_hour_request: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub message: String,
}

impl AppointmentRequest {
    /// Client-side gate before any transmission: name, message and the
    /// selected date non-blank after trimming, phone at least
    /// [`MIN_PHONE_LEN`] characters after trimming.
    pub fn is_complete(&self) -> bool {
        !self.patient_full_name.trim().is_empty()
            && !self.date_hour_request.trim().is_empty()
            && self.phone_number.trim().len() >= MIN_PHONE_LEN
            && !self.message.trim().is_empty()
    }
}

/// Structured error body the booking endpoint returns alongside a 409.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement payload of the connection-oriented exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything that can go wrong between clicking "Reservar" and an outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("slot no longer available")]
    SlotTaken,
    #[error("a request is already pending for this slot")]
    DuplicateRequest,
    #[error("booking conflict")]
    Conflict,
    #[error("connection timed out")]
    ConnectTimeout,
    #[error("no acknowledgement within the wait bound")]
    AckTimeout,
    #[error("server rejected the request: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Server(u16),
}

impl SubmitError {
    /// Map a 409 body onto the conflict taxonomy. The reason vocabulary is
    /// the one the backend is known to emit; anything else is a generic
    /// conflict.
    pub fn conflict_from_body(body: &str) -> SubmitError {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        match parsed.message.as_str() {
            "Slot not available" => SubmitError::SlotTaken,
            "Request already exists for this slot" => SubmitError::DuplicateRequest,
            _ => SubmitError::Conflict,
        }
    }

    /// The Spanish message shown in the outcome modal. Most specific reason
    /// first; everything without one falls back to the generic retry copy.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::SlotTaken => {
                "El horario seleccionado ya no está disponible. Por favor seleccione otro.".into()
            }
            SubmitError::DuplicateRequest => {
                "Ya existe una solicitud pendiente para este horario.".into()
            }
            SubmitError::Conflict => "Conflicto en la reserva. Intente otro horario.".into(),
            SubmitError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => "Algo salió mal, por favor intente de nuevo".into(),
        }
    }
}
