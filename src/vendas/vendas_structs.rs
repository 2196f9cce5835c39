// src/vendas/vendas_structs.rs

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Propriedades aceitas em `sort` na listagem de vendas.
pub const PROPRIEDADES_ORDENAVEIS: &[&str] = &["id", "dataVenda"];

/// Estrutura que representa uma venda.
///
/// O `id` é atribuído pelo repositório no primeiro `save`; antes disso fica vazio.
/// Serializada como `{ "id": string|null, "dataVenda": "YYYY-MM-DD"|null }`.
///
/// A igualdade considera apenas o `id`: duas vendas são iguais somente se ambas
/// já têm ID e os IDs coincidem, ou se são a mesma instância. Uma venda ainda não
/// persistida só é igual a si mesma (nem a um clone), por isso não deve ser usada
/// como chave de `HashMap`/`HashSet` antes do `save`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Venda {
    pub id: Option<String>,
    pub data_venda: Option<NaiveDate>,
}

impl Venda {
    pub fn new() -> Self {
        Venda::default()
    }

    /// Define a data da venda (estilo builder).
    pub fn data_venda(mut self, data_venda: NaiveDate) -> Self {
        self.data_venda = Some(data_venda);
        self
    }

    /// ID da venda; string vazia conta como "sem ID".
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn tem_id(&self) -> bool {
        self.id().is_some()
    }
}

impl PartialEq for Venda {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Venda {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
