// src/shared/mod.rs

// Estrutura padrão das respostas de erro
pub mod shared_structs;
// Taxonomia de erros da API e do repositório
pub mod errors;
// Paginação e ordenação das listagens
pub mod pageable;
// Cabeçalhos de alerta e paginação
pub mod headers;
