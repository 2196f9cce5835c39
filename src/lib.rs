// src/lib.rs

use std::sync::Arc;

pub mod config;  // Configuração (clap)
pub mod shared;  // Módulo shared
pub mod vendas;  // Módulo de vendas

use vendas::venda_resource::VendaResource;
use vendas::venda_store::VendaStore;

// Estado compartilhado entre as rotas: o serviço de vendas com o repositório escolhido.
pub struct AppState {
    pub vendas: VendaResource,
}

impl AppState {
    pub fn new(store: Arc<dyn VendaStore>) -> Self {
        AppState {
            vendas: VendaResource::new(store),
        }
    }
}
