//! Route handlers.
//!
//! Each calculation route parses operands first, then resolves and applies
//! the operation. Outcomes are logged and counted per resolved operation.

use std::time::Instant;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::calc::operands::OPERATION;
use crate::calc::{CalcError, Operands, Operation, OperationGroup, Params};
use crate::http::{CalcParams, CalcResult, ErrorBody};
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `/calculation/{operation}`
pub async fn calculation(
    Path(operation): Path<String>,
    CalcParams(params): CalcParams,
) -> Result<CalcResult, CalcError> {
    evaluate(&operation, &params, |operands| {
        OperationGroup::Calculation.dispatch(&operation, operands)
    })
}

/// `/trigonometry/{operation}`
pub async fn trigonometry(
    Path(operation): Path<String>,
    CalcParams(params): CalcParams,
) -> Result<CalcResult, CalcError> {
    evaluate(&operation, &params, |operands| {
        OperationGroup::Trigonometry.dispatch(&operation, operands)
    })
}

/// `/calculator`, with the operation named in the parameters.
pub async fn calculator(CalcParams(params): CalcParams) -> Result<CalcResult, CalcError> {
    let operation = params.get(OPERATION).unwrap_or_default().to_string();
    evaluate(&operation, &params, |operands| Operation::dispatch(&operation, operands))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

fn evaluate<F>(operation: &str, params: &Params, dispatch: F) -> Result<CalcResult, CalcError>
where
    F: FnOnce(Operands) -> Result<f64, CalcError>,
{
    let start = Instant::now();
    // Unknown names share one label so clients cannot grow the metric set.
    let label = operation
        .parse::<Operation>()
        .map(|op| op.as_str())
        .unwrap_or("unknown");

    let outcome = Operands::from_params(params).and_then(|operands| {
        tracing::debug!(
            operation = %operation,
            num1 = operands.num1,
            num2 = operands.num2,
            "Evaluating"
        );
        dispatch(operands)
    });

    match outcome {
        Ok(result) => {
            tracing::debug!(operation = %operation, result, "Calculation succeeded");
            metrics::record_request(label, "ok", start);
            Ok(CalcResult { result })
        }
        Err(e) => {
            tracing::warn!(operation = %operation, error = %e, "Calculation rejected");
            metrics::record_request(label, e.kind(), start);
            Err(e)
        }
    }
}
