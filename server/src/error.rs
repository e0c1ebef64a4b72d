use std::collections::BTreeMap;
use std::process::{ExitCode, Termination};

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>),
    Validation(garde::Report),
    Rejected(JsonRejection),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<garde::Report> for ErrorStatus {
    fn from(e: garde::Report) -> Self {
        ErrorStatus::Validation(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(e: JsonRejection) -> Self {
        ErrorStatus::Rejected(e)
    }
}

/// Field name to messages, e.g. `{"errors": {"title": ["not set"]}}`.
/// Field names are rendered in the camelCase used by request bodies.
#[derive(Debug, Serialize)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: BTreeMap::from([(field.into(), vec![message.into()])]),
        }
    }
}

impl From<garde::Report> for FieldErrors {
    fn from(report: garde::Report) -> Self {
        let mut errors = BTreeMap::<String, Vec<String>>::new();
        for (path, error) in report.iter() {
            errors
                .entry(camel_case(&path.to_string()))
                .or_default()
                .push(error.to_string());
        }
        Self { errors }
    }
}

fn camel_case(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut upper = false;
    for c in path.chars() {
        match c {
            '_' => upper = true,
            c if upper => {
                out.extend(c.to_uppercase());
                upper = false;
            }
            c => out.push(c),
        }
    }
    out
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        match self {
            ErrorStatus::Kernel(report) => match report.current_context() {
                KernelError::NotFound => StatusCode::NOT_FOUND.into_response(),
                KernelError::Timeout => StatusCode::REQUEST_TIMEOUT.into_response(),
                KernelError::Ambiguous | KernelError::Internal => {
                    tracing::error!(error = ?report, "Unexpected error happened");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            ErrorStatus::Validation(report) => {
                (StatusCode::BAD_REQUEST, Json(FieldErrors::from(report))).into_response()
            }
            ErrorStatus::Rejected(rejection) => {
                tracing::debug!(%rejection, "request body rejected");
                let body = FieldErrors::single("body", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
