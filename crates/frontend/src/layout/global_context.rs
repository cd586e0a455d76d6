use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Глобальное состояние приложения: текущий маршрут SPA.
///
/// Источник истины для маршрута это `window.location`; сигнал обновляется при
/// навигации из приложения и по событию `popstate` (кнопки браузера).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(current_route()),
        }
    }

    /// Подписка на `popstate`; вызывается один раз при старте приложения
    pub fn init_router_integration(&self) {
        let Some(w) = window() else {
            return;
        };

        let route = self.route;
        let closure = Closure::wrap(Box::new(move |_ev: web_sys::PopStateEvent| {
            let next = current_route();
            log::debug!("popstate -> {}", next.to_url());
            route.set(next);
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

        if w
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to subscribe to popstate");
        }
        closure.forget();
    }

    /// Перейти на маршрут с новой записью в истории
    pub fn navigate(&self, route: AppRoute) {
        let url = route.to_url();
        leptos::logging::log!("navigate: {}", url);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
        }
        self.route.set(route);
        scroll_to_top();
    }

    /// Обновить URL без новой записи в истории (нормализация `?tab=`)
    pub fn replace(&self, route: AppRoute) {
        let url = route.to_url();
        if current_url().as_deref() != Some(url.as_str()) {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&url),
                    );
                }
            }
        }
        if self.route.with_untracked(|current| current != &route) {
            self.route.set(route);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Маршрут по текущему `window.location`
pub fn current_route() -> AppRoute {
    let Some(location) = window().map(|w| w.location()) else {
        return AppRoute::Home;
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    AppRoute::parse(&path, &search)
}

fn current_url() -> Option<String> {
    let location = window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().ok()?;
    Some(format!("{}{}", path, search))
}

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
