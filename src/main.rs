// src/main.rs

use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};

use farmcontroller::config::Config;
use farmcontroller::vendas::{
    self,
    venda_store::{InMemoryVendaStore, VendaStore},
    venda_store_pg::PgVendaStore,
};
use farmcontroller::AppState;

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::parse();

    // Logs via tracing; o Logger do Actix também cai aqui pela ponte com `log`.
    tracing_subscriber::fmt::init();

    // Escolhe o repositório: PostgreSQL se houver DATABASE_URL, senão memória.
    let store: Arc<dyn VendaStore> = match &config.database_url {
        Some(database_url) => match PgVendaStore::connect(database_url, config.max_connections).await {
            Ok(store) => {
                info!("Repositório de vendas no PostgreSQL");
                Arc::new(store)
            }
            Err(e) => {
                error!("Falha ao conectar ao banco PostgreSQL: {}", e);
                return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
            }
        },
        None => {
            info!("DATABASE_URL não definida; vendas ficam em memória");
            Arc::new(InMemoryVendaStore::new())
        }
    };

    let app_state = web::Data::new(AppState::new(store));

    info!("Iniciando API de vendas em {}:{}...", config.host, config.port);

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(vendas::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
