// src/config.rs

use clap::Parser;

/// Configuração do servidor, lida da linha de comando ou de variáveis de ambiente.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "API REST de vendas", long_about = None)]
pub struct Config {
    /// Endereço IP em que o servidor escuta
    #[arg(long, env = "VENDAS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Porta HTTP
    #[arg(short, long, env = "VENDAS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// URL do PostgreSQL; sem ela as vendas ficam em memória
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Tamanho máximo do pool de conexões
    #[arg(long, env = "VENDAS_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}
