// src/vendas/venda_store.rs

use std::cmp::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::vendas_structs::Venda;
use crate::shared::errors::StoreError;
use crate::shared::pageable::{Direction, Order, Pageable};

/// Repositório de vendas.
///
/// `save` atribui um ID quando a venda ainda não tem um e sobrescreve o registro
/// quando o ID já existe (upsert). `delete_by_id` é idempotente.
#[async_trait]
pub trait VendaStore: Send + Sync {
    async fn save(&self, venda: Venda) -> Result<Venda, StoreError>;

    async fn find_all(&self, pageable: &Pageable) -> Result<Vec<Venda>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Venda>, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    async fn delete_all(&self) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Gera o ID de uma venda nova.
pub(crate) fn novo_id() -> String {
    Uuid::new_v4().to_string()
}

/// Repositório em memória, estilo documento: guarda as vendas na ordem de inserção.
#[derive(Default)]
pub struct InMemoryVendaStore {
    vendas: RwLock<Vec<Venda>>,
}

impl InMemoryVendaStore {
    pub fn new() -> Self {
        InMemoryVendaStore::default()
    }
}

#[async_trait]
impl VendaStore for InMemoryVendaStore {
    async fn save(&self, mut venda: Venda) -> Result<Venda, StoreError> {
        let mut vendas = self.vendas.write().map_err(|_| StoreError::LockPoisoned)?;

        let id = match venda.id() {
            Some(id) => id.to_string(),
            None => novo_id(),
        };
        venda.id = Some(id.clone());

        match vendas.iter_mut().find(|v| v.id() == Some(id.as_str())) {
            Some(existente) => *existente = venda.clone(),
            None => vendas.push(venda.clone()),
        }

        Ok(venda)
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Vec<Venda>, StoreError> {
        let mut vendas = self
            .vendas
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .clone();

        // sort_by é estável: empates mantêm a ordem de inserção
        if !pageable.sort.is_empty() {
            vendas.sort_by(|a, b| comparar(a, b, &pageable.sort));
        }

        Ok(pageable.aplicar(vendas))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Venda>, StoreError> {
        let vendas = self.vendas.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(vendas.iter().find(|v| v.id() == Some(id)).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut vendas = self.vendas.write().map_err(|_| StoreError::LockPoisoned)?;
        vendas.retain(|v| v.id() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.vendas
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let vendas = self.vendas.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(vendas.len() as u64)
    }
}

fn comparar(a: &Venda, b: &Venda, ordens: &[Order]) -> Ordering {
    ordens
        .iter()
        .map(|ordem| {
            let ordering = match ordem.property.as_str() {
                "id" => a.id.cmp(&b.id),
                "dataVenda" => a.data_venda.cmp(&b.data_venda),
                _ => Ordering::Equal,
            };
            match ordem.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
