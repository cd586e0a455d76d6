use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

/// Страница "не найдено": для неизвестного пути и для отсутствующих id
#[component]
pub fn NotFoundPage(
    #[prop(into)] path: String,
    /// Куда вести кнопку "назад"; по умолчанию каталог Blueprints
    #[prop(optional)]
    back: Option<AppRoute>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    log::warn!("not found: {}", path);
    let back = back.unwrap_or_else(|| {
        AppRoute::NotFound {
            path: path.clone(),
        }
        .listing()
    });

    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="empty-state">
                <h1>"404"</h1>
                <p>{format!("Nothing lives at {}", path)}</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(back.clone())
                >
                    "Back to catalog"
                </Button>
            </div>
        </PageFrame>
    }
}
