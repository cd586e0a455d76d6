//! Детальная карточка курса: ручная запись → генерация из курса → не найдено.

pub mod dto;
pub mod generator;
pub mod hand_authored;
pub mod resolver;

pub use dto::{CourseDetail, CourseModule};
pub use resolver::{get_course_detail, resolve_course_detail};
