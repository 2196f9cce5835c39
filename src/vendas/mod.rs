// src/vendas/mod.rs

// Declara o submódulo com a struct Venda
pub mod vendas_structs;
// Contrato do repositório e implementação em memória
pub mod venda_store;
// Repositório no PostgreSQL
pub mod venda_store_pg;
// Serviço com as regras de cada operação
pub mod venda_resource;
// Rotas HTTP de vendas
pub mod vendas_router;

pub use vendas_router::configure;
