// src/shared/headers.rs

use actix_web::http::header::HeaderValue;
use actix_web::HttpResponseBuilder;

/// Nome da aplicação usado como prefixo dos cabeçalhos de alerta.
pub const APPLICATION_NAME: &str = "farmcontrollerApp";

pub const ALERT_HEADER: &str = "X-farmcontrollerApp-alert";
pub const PARAMS_HEADER: &str = "X-farmcontrollerApp-params";
pub const ERROR_HEADER: &str = "X-farmcontrollerApp-error";
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Adiciona um cabeçalho ao builder ignorando valores que não são ASCII visível.
/// Os ids vêm do cliente, então um valor inválido não pode derrubar a resposta.
fn inserir(builder: &mut HttpResponseBuilder, nome: &'static str, valor: &str) {
    if let Ok(valor) = HeaderValue::from_str(valor) {
        builder.insert_header((nome, valor));
    }
}

/// Cabeçalhos de alerta para "entidade criada".
pub fn entidade_criada(builder: &mut HttpResponseBuilder, entidade: &str, param: &str) {
    alerta(builder, &format!("{}.{}.created", APPLICATION_NAME, entidade), param);
}

/// Cabeçalhos de alerta para "entidade atualizada".
pub fn entidade_atualizada(builder: &mut HttpResponseBuilder, entidade: &str, param: &str) {
    alerta(builder, &format!("{}.{}.updated", APPLICATION_NAME, entidade), param);
}

/// Cabeçalhos de alerta para "entidade removida".
pub fn entidade_removida(builder: &mut HttpResponseBuilder, entidade: &str, param: &str) {
    alerta(builder, &format!("{}.{}.deleted", APPLICATION_NAME, entidade), param);
}

/// Cabeçalhos de falha: chave do erro (ex.: `error.idexists`) e nome da entidade.
pub fn falha(builder: &mut HttpResponseBuilder, entidade: &str, chave_erro: &str) {
    inserir(builder, ERROR_HEADER, &format!("error.{}", chave_erro));
    inserir(builder, PARAMS_HEADER, entidade);
}

/// Cabeçalho de paginação com o total de registros persistidos.
pub fn total(builder: &mut HttpResponseBuilder, total: u64) {
    inserir(builder, TOTAL_COUNT_HEADER, &total.to_string());
}

fn alerta(builder: &mut HttpResponseBuilder, mensagem: &str, param: &str) {
    inserir(builder, ALERT_HEADER, mensagem);
    inserir(builder, PARAMS_HEADER, param);
}
