pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас приложения: шапка с навигацией и область страницы.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">{children()}</main>
        </div>
    }
}
