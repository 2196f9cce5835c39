// src/vendas/venda_store_pg.rs

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, query_scalar, Pool, Postgres};

use super::venda_store::{novo_id, VendaStore};
use super::vendas_structs::Venda;
use crate::shared::errors::StoreError;
use crate::shared::pageable::{Direction, Pageable};

/// Repositório de vendas no PostgreSQL.
///
/// A coluna `seq` guarda a ordem de inserção, usada como desempate da ordenação.
pub struct PgVendaStore {
    db_pool: Pool<Postgres>,
}

impl PgVendaStore {
    /// Conecta ao banco e garante que a tabela `vendas` exista.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let db_pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = PgVendaStore { db_pool };
        store.criar_tabela().await?;
        Ok(store)
    }

    pub(crate) async fn criar_tabela(&self) -> Result<(), StoreError> {
        query(
            "CREATE TABLE IF NOT EXISTS vendas (
                seq BIGSERIAL,
                id TEXT PRIMARY KEY,
                data_venda DATE
            )",
        )
        .execute(&self.db_pool)
        .await?;
        Ok(())
    }
}

/// Mapeia a propriedade JSON para a coluna. Propriedades desconhecidas são ignoradas.
fn coluna(propriedade: &str) -> Option<&'static str> {
    match propriedade {
        "id" => Some("id"),
        "dataVenda" => Some("data_venda"),
        _ => None,
    }
}

fn order_by(pageable: &Pageable) -> String {
    let mut colunas: Vec<String> = pageable
        .sort
        .iter()
        .filter_map(|ordem| {
            coluna(&ordem.property).map(|c| match ordem.direction {
                Direction::Asc => format!("{} ASC", c),
                Direction::Desc => format!("{} DESC", c),
            })
        })
        .collect();
    colunas.push("seq ASC".to_string());
    colunas.join(", ")
}

#[async_trait]
impl VendaStore for PgVendaStore {
    async fn save(&self, mut venda: Venda) -> Result<Venda, StoreError> {
        let id = match venda.id() {
            Some(id) => id.to_string(),
            None => novo_id(),
        };
        venda.id = Some(id);

        let salva = query_as::<_, Venda>(
            "INSERT INTO vendas (id, data_venda) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET data_venda = EXCLUDED.data_venda
             RETURNING id, data_venda",
        )
        .bind(&venda.id)
        .bind(venda.data_venda)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(salva)
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Vec<Venda>, StoreError> {
        let mut sql = format!(
            "SELECT id, data_venda FROM vendas ORDER BY {}",
            order_by(pageable)
        );

        let vendas = match pageable.size {
            Some(size) => {
                sql.push_str(" LIMIT $1 OFFSET $2");
                query_as::<_, Venda>(&sql)
                    .bind(i64::try_from(size).unwrap_or(i64::MAX))
                    .bind(i64::try_from(pageable.offset()).unwrap_or(i64::MAX))
                    .fetch_all(&self.db_pool)
                    .await?
            }
            None => query_as::<_, Venda>(&sql).fetch_all(&self.db_pool).await?,
        };

        Ok(vendas)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Venda>, StoreError> {
        let venda = query_as::<_, Venda>("SELECT id, data_venda FROM vendas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?;
        Ok(venda)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        query("DELETE FROM vendas WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        query("DELETE FROM vendas").execute(&self.db_pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let total: i64 = query_scalar("SELECT COUNT(*) FROM vendas")
            .fetch_one(&self.db_pool)
            .await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pageable::Pageable;

    #[test]
    fn order_by_usa_colunas_conhecidas_e_desempata_por_seq() {
        let pageable = Pageable::from_query("sort=dataVenda,desc&sort=id&sort=drop table").unwrap();
        assert_eq!(order_by(&pageable), "data_venda DESC, id ASC, seq ASC");
        assert_eq!(order_by(&Pageable::unpaged()), "seq ASC");
    }

    // Requer um PostgreSQL acessível em DATABASE_URL.
    #[actix_web::test]
    #[ignore = "Requer banco de dados de teste"]
    async fn ciclo_completo_no_postgres() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL não definida");
        let store = PgVendaStore::connect(&url, 1).await.unwrap();
        store.delete_all().await.unwrap();

        let data = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let salva = store.save(Venda::new().data_venda(data)).await.unwrap();
        let id = salva.id().unwrap().to_string();
        assert_eq!(store.count().await.unwrap(), 1);

        let encontrada = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(encontrada.data_venda, Some(data));

        store.delete_by_id(&id).await.unwrap();
        store.delete_by_id(&id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
