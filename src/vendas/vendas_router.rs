// src/vendas/vendas_router.rs

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;
use crate::shared::errors::ApiError;
use crate::shared::headers;
use crate::shared::pageable::Pageable;

use super::venda_resource::ENTITY_NAME;
use super::vendas_structs::Venda;

/// Rota para cadastrar uma nova venda.
///
/// A venda não pode trazer ID; o repositório atribui um. Responde 201 com a
/// venda persistida e o cabeçalho `Location`.
#[post("/api/vendas")]
pub async fn cadastrar_venda(
    data: web::Data<AppState>,
    venda: web::Json<Venda>,
) -> Result<HttpResponse, ApiError> {
    let salva = data.vendas.criar(venda.into_inner()).await?;
    let id = salva.id().unwrap_or_default().to_string();

    let mut builder = HttpResponse::Created();
    builder.insert_header((header::LOCATION, format!("/api/vendas/{}", id)));
    headers::entidade_criada(&mut builder, ENTITY_NAME, &id);
    Ok(builder.json(salva))
}

/// Rota para atualizar uma venda. O ID é obrigatório no corpo.
#[put("/api/vendas")]
pub async fn atualizar_venda(
    data: web::Data<AppState>,
    venda: web::Json<Venda>,
) -> Result<HttpResponse, ApiError> {
    let atualizada = data.vendas.atualizar(venda.into_inner()).await?;

    let mut builder = HttpResponse::Ok();
    headers::entidade_atualizada(&mut builder, ENTITY_NAME, atualizada.id().unwrap_or_default());
    Ok(builder.json(atualizada))
}

/// Rota para listar as vendas, com paginação (`page`, `size`) e ordenação (`sort`).
#[get("/api/vendas")]
pub async fn buscar_vendas(
    data: web::Data<AppState>,
    pageable: Pageable,
) -> Result<HttpResponse, ApiError> {
    let (vendas, total) = data.vendas.listar(&pageable).await?;

    let mut builder = HttpResponse::Ok();
    headers::total(&mut builder, total);
    Ok(builder.json(vendas))
}

/// Rota para buscar uma venda por ID. Responde 404 sem corpo se não existir.
#[get("/api/vendas/{id}")]
pub async fn buscar_venda_por_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match data.vendas.buscar(&id).await? {
        Some(venda) => Ok(HttpResponse::Ok().json(venda)),
        None => Err(ApiError::NotFound),
    }
}

/// Rota para deletar uma venda. Responde 200 mesmo que o ID não exista.
#[delete("/api/vendas/{id}")]
pub async fn deletar_venda(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    data.vendas.deletar(&id).await?;

    let mut builder = HttpResponse::Ok();
    headers::entidade_removida(&mut builder, ENTITY_NAME, &id);
    Ok(builder.finish())
}

/// Registra as rotas de vendas e o tratamento de JSON inválido.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(ENTITY_NAME, "invalidjson", format!("JSON inválido: {}", err)).into()
    }))
    .service(cadastrar_venda)
    .service(atualizar_venda)
    .service(buscar_vendas)
    .service(buscar_venda_por_id)
    .service(deletar_venda);
}
