// src/shared/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::headers;
use super::shared_structs::GenericResponse;

/// Falhas do repositório de vendas.
#[derive(Debug, Error)]
pub enum StoreError {
    /// O lock do repositório em memória foi envenenado por um panic.
    #[error("lock do repositório envenenado")]
    LockPoisoned,

    /// Erro devolvido pelo PostgreSQL.
    #[error("erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),
}

/// Erros de requisição da API REST.
///
/// Todos são locais à requisição; o mapeamento para status HTTP é feito por
/// [`ApiError::status_code`] e depende apenas do tipo do erro.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Entidade nova enviada já com ID.
    #[error("{message}")]
    Conflict {
        entidade: &'static str,
        chave: &'static str,
        message: String,
    },

    /// Requisição mal formada (ID ausente, paginação inválida, JSON inválido).
    #[error("{message}")]
    BadRequest {
        entidade: &'static str,
        chave: &'static str,
        message: String,
    },

    /// Entidade não encontrada. Respondida com corpo vazio.
    #[error("entidade não encontrada")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn conflict(entidade: &'static str, chave: &'static str, message: impl Into<String>) -> Self {
        ApiError::Conflict {
            entidade,
            chave,
            message: message.into(),
        }
    }

    pub fn bad_request(entidade: &'static str, chave: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            entidade,
            chave,
            message: message.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conflict { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            ApiError::Conflict {
                entidade,
                chave,
                message,
            }
            | ApiError::BadRequest {
                entidade,
                chave,
                message,
            } => {
                headers::falha(&mut builder, entidade, chave);
                builder.json(GenericResponse::erro(message.as_str()))
            }
            ApiError::NotFound => builder.finish(),
            ApiError::Store(e) => {
                tracing::error!("Erro no repositório: {}", e);
                builder.json(GenericResponse::erro("Erro interno ao acessar o repositório"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_depende_apenas_do_tipo_do_erro() {
        assert_eq!(
            ApiError::conflict("venda", "idexists", "x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::bad_request("venda", "idnull", "y").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn conflito_envia_cabecalhos_de_erro() {
        let resp = ApiError::conflict("venda", "idexists", "já tem ID").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(headers::ERROR_HEADER).unwrap(),
            "error.idexists"
        );
        assert_eq!(resp.headers().get(headers::PARAMS_HEADER).unwrap(), "venda");
    }
}
