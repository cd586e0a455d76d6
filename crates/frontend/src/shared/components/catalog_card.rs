use crate::shared::list_utils::highlight_matches;
use contracts::shared::catalog::CatalogItem;
use leptos::prelude::*;
use thaw::*;

/// Данные карточки, общие для всех каталогов
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub badges: Vec<String>,
    pub tags: Vec<String>,
}

impl CardData {
    pub fn from_item<T: CatalogItem>(item: &T) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            badges: item.badges(),
            tags: item.tags().to_vec(),
        }
    }
}

/// Карточки для отфильтрованного среза каталога (порядок сохраняется)
pub fn to_cards<T: CatalogItem>(items: Vec<&T>) -> Vec<CardData> {
    items.into_iter().map(CardData::from_item).collect()
}

#[component]
pub fn CatalogCard(
    card: CardData,
    /// Применённый запрос для подсветки
    #[prop(into)]
    query: Signal<String>,
    /// Открыть детальную страницу (если у каталога она есть)
    #[prop(optional)]
    on_open: Option<Callback<String>>,
) -> impl IntoView {
    let CardData {
        id,
        title,
        description,
        badges,
        tags,
    } = card;
    let data_id = id.clone();

    view! {
        <div
            class="catalog-card"
            data-id=data_id
            on:click=move |_| {
                if let Some(open) = on_open {
                    open.run(id.clone());
                }
            }
        >
            <h3 class="catalog-card__title">{move || highlight_matches(&title, &query.get())}</h3>
            <p class="catalog-card__description">
                {move || highlight_matches(&description, &query.get())}
            </p>
            <div class="catalog-card__badges">
                {badges
                    .into_iter()
                    .map(|badge| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {badge}
                        </Badge>
                    })
                    .collect_view()}
            </div>
            <div class="catalog-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="filter-tag">{tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
