//! Детальная карточка blueprint.
//!
//! Порядок поиска: ручная запись → генерация из Solution Spec → генерация из
//! Solution Build → не найдено.

pub mod dto;
pub mod generator;
pub mod hand_authored;
pub mod resolver;

pub use dto::{ArchitectureLayer, BlueprintDetail, DeliveryPhase, DetailSource};
pub use resolver::{get_blueprint_detail, resolve_blueprint_detail};
