use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário já existe")]
    UsernameAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Apenas administradores")]
    AdminOnly,

    // O recurso que não foi encontrado define a mensagem da resposta.
    #[error("{0}")]
    NotFound(&'static str),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // O contrato do front espera só o primeiro erro: { message, field }.
            AppError::ValidationError(errors) => {
                let (field, message) = first_validation_error(&errors);
                let body = Json(json!({
                    "message": message,
                    "field": field,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UsernameAlreadyExists => {
                (StatusCode::CONFLICT, "El nombre de usuario ya existe".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Usuario o contraseña inválidos".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticación inválido o ausente".to_string(),
            ),
            AppError::AdminOnly => (
                StatusCode::FORBIDDEN,
                "Requiere rol de administrador".to_string(),
            ),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),

            // Todos os outros erros (DatabaseError, InternalServerError, ...) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe algo genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocurrió un error inesperado".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

// Escolhe o primeiro erro de campo e devolve (campo em camelCase, mensagem).
fn first_validation_error(errors: &validator::ValidationErrors) -> (String, String) {
    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Dato inválido".to_string());
            return (snake_to_camel(field.as_ref()), message);
        }
    }
    ("".to_string(), "Dato inválido".to_string())
}

// Os structs usam snake_case, mas o front fala camelCase (expirationDate).
fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_field_names_to_camel_case() {
        assert_eq!(snake_to_camel("expiration_date"), "expirationDate");
        assert_eq!(snake_to_camel("quantity"), "quantity");
        assert_eq!(snake_to_camel("mechanism_of_action"), "mechanismOfAction");
    }
}
