pub mod components;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod storage;

/// Текущее время браузера в миллисекундах с эпохи
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}
