// src/vendas/venda_resource.rs

use std::sync::Arc;

use tracing::{debug, warn};

use super::venda_store::VendaStore;
use super::vendas_structs::{Venda, PROPRIEDADES_ORDENAVEIS};
use crate::shared::errors::ApiError;
use crate::shared::pageable::Pageable;

/// Nome da entidade usado nos cabeçalhos de alerta e de erro.
pub const ENTITY_NAME: &str = "venda";

/// Serviço REST das vendas: valida o ID conforme a operação e delega ao repositório.
///
/// Não há garantia de ordem ou atomicidade entre requisições distintas; a
/// concorrência fica a cargo do repositório.
#[derive(Clone)]
pub struct VendaResource {
    store: Arc<dyn VendaStore>,
}

impl VendaResource {
    pub fn new(store: Arc<dyn VendaStore>) -> Self {
        VendaResource { store }
    }

    pub(crate) fn store(&self) -> &Arc<dyn VendaStore> {
        &self.store
    }

    /// Cadastra uma venda nova. Uma venda que já chega com ID é rejeitada.
    pub async fn criar(&self, venda: Venda) -> Result<Venda, ApiError> {
        debug!("REST request to save Venda : {:?}", venda);
        if venda.tem_id() {
            warn!("Venda nova recebida com ID {:?}", venda.id);
            return Err(ApiError::conflict(
                ENTITY_NAME,
                "idexists",
                "Uma nova venda não pode já ter um ID",
            ));
        }
        Ok(self.store.save(venda).await?)
    }

    /// Atualiza (ou insere, se o ID ainda não existir) uma venda.
    pub async fn atualizar(&self, venda: Venda) -> Result<Venda, ApiError> {
        debug!("REST request to update Venda : {:?}", venda);
        if !venda.tem_id() {
            warn!("Atualização de venda sem ID");
            return Err(ApiError::bad_request(ENTITY_NAME, "idnull", "ID inválido"));
        }
        Ok(self.store.save(venda).await?)
    }

    /// Lista uma página de vendas junto com o total persistido.
    pub async fn listar(&self, pageable: &Pageable) -> Result<(Vec<Venda>, u64), ApiError> {
        debug!("REST request to get a page of Vendas : {:?}", pageable);
        if let Some(ordem) = pageable
            .sort
            .iter()
            .find(|o| !PROPRIEDADES_ORDENAVEIS.contains(&o.property.as_str()))
        {
            return Err(ApiError::bad_request(
                ENTITY_NAME,
                "invalidsort",
                format!("Propriedade de ordenação desconhecida: '{}'", ordem.property),
            ));
        }

        let vendas = self.store.find_all(pageable).await?;
        let total = self.store.count().await?;
        Ok((vendas, total))
    }

    pub async fn buscar(&self, id: &str) -> Result<Option<Venda>, ApiError> {
        debug!("REST request to get Venda : {}", id);
        Ok(self.store.find_by_id(id).await?)
    }

    /// Remove a venda, se existir. Remover um ID inexistente não é erro.
    pub async fn deletar(&self, id: &str) -> Result<(), ApiError> {
        debug!("REST request to delete Venda : {}", id);
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}
