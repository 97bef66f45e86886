use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// RFC 7807 body returned by HTTP endpoints.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Service unavailable: {detail}")]
    Unavailable { detail: String },
}

impl AppError {
    fn code(&self) -> String {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
            AppError::Unavailable { .. } => "UNAVAILABLE".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Config { detail } | AppError::Unavailable { detail } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn unavailable(detail: String) -> Self {
        Self::Unavailable { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<actix::MailboxError> for AppError {
    fn from(e: actix::MailboxError) -> Self {
        AppError::unavailable(format!("match hub unreachable: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        let problem_details = ProblemDetails {
            type_: format!("https://duel.local/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.detail(),
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
