use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::constants::*;
use crate::error::{ApiError, RelayError, ValidationError};

/// A field counts as missing when absent, null, false, empty, or the number zero.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}

/// Gate applied before anything leaves the relay.
///
/// Only `fecha`, `tipo`, `categoria` and `monto` are checked; `concepto` and
/// `medioPago` pass through whatever they hold. A payload that is not an
/// object has none of the required fields.
pub fn validate_submission(payload: &Value) -> Result<(), ValidationError> {
    let fields = payload.as_object();
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|key| is_missing(fields.and_then(|f| f.get(*key))))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    match fields.and_then(|f| f.get(FIELD_AMOUNT)).and_then(parse_amount) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidAmount),
    }
}

/// `POST /api/sheets`: validate, forward the original bytes, pass the reply back.
#[tracing::instrument(skip_all, fields(submission_id = %Uuid::new_v4()))]
pub async fn submit_movement(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(RelayError::MalformedRequest)?;
    validate_submission(&payload)?;

    tracing::debug!(bytes = body.len(), "forwarding submission");
    let reply = state.sheets.append(body).await?;
    tracing::info!(result = ?reply.get("result"), "submission relayed");

    Ok(Json(reply))
}
