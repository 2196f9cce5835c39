// src/shared/pageable.rs

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use percent_encoding::percent_decode_str;

use super::errors::ApiError;

/// Tamanho de página usado quando a requisição não informa `size`.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maior tamanho de página aceito; valores acima são truncados.
pub const MAX_PAGE_SIZE: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Um critério de ordenação (`sort=propriedade,direção`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

/// Parâmetros de paginação e ordenação de uma listagem.
///
/// `size == None` significa "sem paginação": todos os registros a partir de `page 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    pub page: u64,
    pub size: Option<u64>,
    pub sort: Vec<Order>,
}

impl Default for Pageable {
    fn default() -> Self {
        Pageable {
            page: 0,
            size: Some(DEFAULT_PAGE_SIZE),
            sort: Vec::new(),
        }
    }
}

impl Pageable {
    /// Lista tudo, na ordem de inserção.
    pub fn unpaged() -> Self {
        Pageable {
            page: 0,
            size: None,
            sort: Vec::new(),
        }
    }

    pub fn offset(&self) -> u64 {
        match self.size {
            Some(size) => self.page.saturating_mul(size),
            None => 0,
        }
    }

    /// Recorta a página pedida de uma lista já ordenada.
    pub fn aplicar<T>(&self, itens: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        match self.size {
            Some(size) => itens
                .into_iter()
                .skip(offset)
                .take(usize::try_from(size).unwrap_or(usize::MAX))
                .collect(),
            None => itens,
        }
    }

    /// Interpreta a query string (`page`, `size` e quantos `sort` vierem).
    ///
    /// Chaves desconhecidas são ignoradas.
    pub fn from_query(query: &str) -> Result<Self, ApiError> {
        let mut pageable = Pageable::default();

        for par in query.split('&').filter(|p| !p.is_empty()) {
            let (chave, valor) = par.split_once('=').unwrap_or((par, ""));
            let chave = decodificar(chave)?;
            let valor = decodificar(valor)?;

            match chave.as_str() {
                "page" => {
                    pageable.page = valor
                        .trim()
                        .parse()
                        .map_err(|_| invalido(format!("Página inválida: '{}'", valor)))?;
                }
                "size" => {
                    let size: u64 = valor
                        .trim()
                        .parse()
                        .map_err(|_| invalido(format!("Tamanho de página inválido: '{}'", valor)))?;
                    if size == 0 {
                        return Err(invalido("O tamanho da página deve ser maior que zero"));
                    }
                    pageable.size = Some(size.min(MAX_PAGE_SIZE));
                }
                "sort" => pageable.sort.extend(interpretar_sort(&valor)),
                _ => {}
            }
        }

        Ok(pageable)
    }
}

/// `id,desc` -> [id DESC]; `id,dataVenda` -> [id ASC, dataVenda ASC].
fn interpretar_sort(valor: &str) -> Vec<Order> {
    let mut partes: Vec<&str> = valor
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let direction = match partes.last().map(|p| p.to_ascii_lowercase()) {
        Some(ultima) if ultima == "desc" => {
            partes.pop();
            Direction::Desc
        }
        Some(ultima) if ultima == "asc" => {
            partes.pop();
            Direction::Asc
        }
        _ => Direction::Asc,
    };

    partes
        .into_iter()
        .map(|property| Order {
            property: property.to_string(),
            direction,
        })
        .collect()
}

fn decodificar(texto: &str) -> Result<String, ApiError> {
    let texto = texto.replace('+', " ");
    percent_decode_str(&texto)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| invalido("Parâmetros de paginação com codificação inválida"))
}

fn invalido(message: impl Into<String>) -> ApiError {
    ApiError::bad_request("pageable", "invalidpageable", message)
}

/// Extrator do Actix: lê a paginação da query string da requisição.
impl FromRequest for Pageable {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Pageable::from_query(req.query_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_vazia_usa_padrao() {
        let pageable = Pageable::from_query("").unwrap();
        assert_eq!(pageable, Pageable::default());
        assert_eq!(pageable.size, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn interpreta_pagina_tamanho_e_varios_sorts() {
        let pageable = Pageable::from_query("page=2&size=5&sort=id,desc&sort=dataVenda").unwrap();
        assert_eq!(pageable.page, 2);
        assert_eq!(pageable.size, Some(5));
        assert_eq!(pageable.offset(), 10);
        assert_eq!(
            pageable.sort,
            vec![
                Order {
                    property: "id".to_string(),
                    direction: Direction::Desc
                },
                Order {
                    property: "dataVenda".to_string(),
                    direction: Direction::Asc
                },
            ]
        );
    }

    #[test]
    fn sort_codificado_e_direcao_maiuscula() {
        let pageable = Pageable::from_query("sort=id%2CDESC").unwrap();
        assert_eq!(pageable.sort[0].direction, Direction::Desc);
    }

    #[test]
    fn tamanho_acima_do_limite_e_truncado() {
        let pageable = Pageable::from_query("size=999999").unwrap();
        assert_eq!(pageable.size, Some(MAX_PAGE_SIZE));
    }

    #[test]
    fn rejeita_pagina_ou_tamanho_invalidos() {
        assert!(Pageable::from_query("page=abc").is_err());
        assert!(Pageable::from_query("size=0").is_err());
        assert!(Pageable::from_query("size=-1").is_err());
    }

    #[test]
    fn aplicar_recorta_a_pagina() {
        let pageable = Pageable::from_query("page=1&size=2").unwrap();
        assert_eq!(pageable.aplicar(vec![1, 2, 3, 4, 5]), vec![3, 4]);
        assert_eq!(Pageable::unpaged().aplicar(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
