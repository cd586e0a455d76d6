//! Общие контракты каталога платформы цифровой трансформации.
//!
//! Крейт не зависит от целевой платформы: одни и те же типы, статические
//! каталоги и правила фильтрации используются во frontend (wasm32) и в backend.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod usecases;
