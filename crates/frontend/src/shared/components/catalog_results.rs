use super::catalog_card::{CardData, CatalogCard};
use leptos::prelude::*;
use thaw::*;

/// Сетка карточек со счётчиком и пустым состоянием
#[component]
pub fn CatalogResults(
    #[prop(into)] cards: Signal<Vec<CardData>>,
    /// Размер каталога вкладки до фильтрации
    #[prop(into)]
    total: Signal<usize>,
    #[prop(into)] query: Signal<String>,
    #[prop(optional)] on_open: Option<Callback<String>>,
    /// "Clear filters" в пустом состоянии
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="catalog-results">
            <div class="catalog-results__count">
                {move || format!("Showing {} of {}", cards.with(Vec::len), total.get())}
            </div>
            {move || {
                let items = cards.get();
                if items.is_empty() {
                    view! { <EmptyState on_clear=on_clear /> }.into_any()
                } else {
                    view! {
                        <div class="catalog-grid">
                            {items
                                .into_iter()
                                .map(|card| match on_open {
                                    Some(open) => view! { <CatalogCard card=card query=query on_open=open /> }.into_any(),
                                    None => view! { <CatalogCard card=card query=query /> }.into_any(),
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Ничего не найдено
#[component]
pub fn EmptyState(on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No results found"</h3>
            <p>"Try a different search term or remove some filters."</p>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear.run(())>
                "Clear filters"
            </Button>
        </div>
    }
}
