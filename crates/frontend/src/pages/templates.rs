use crate::shared::components::catalog_card::to_cards;
use crate::shared::components::catalog_results::CatalogResults;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_template::{templates, Template};
use contracts::shared::filter::FacetRecord;
use contracts::shared::search::filter_catalog;
use contracts::shared::tabs::{TabState, TemplateTab};
use leptos::prelude::*;
use thaw::*;

/// Marketplaces → Templates (одна вкладка, без детальной страницы)
#[component]
pub fn TemplatesPage() -> impl IntoView {
    let state = RwSignal::new(TabState::<TemplateTab>::default());

    let config = Signal::derive(Template::filter_config);
    let total = Signal::derive(|| templates().len());
    let cards = Memo::new(move |_| {
        state.with(|s| to_cards(filter_catalog(templates(), &s.filters, &s.query)))
    });
    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let selected = Signal::derive(move || state.with(|s| s.filters.clone()));

    let on_toggle = Callback::new(move |(group, value): (String, String)| {
        state.update(|s| s.filters.toggle(&group, &value));
    });
    let on_clear_facets = Callback::new(move |_: ()| state.update(|s| s.filters.clear()));
    let on_clear_all = Callback::new(move |_: ()| state.update(|s| s.clear_all()));
    let on_search = Callback::new(move |q: String| state.update(|s| s.query = q));

    view! {
        <PageFrame page_id="templates--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h1>"Templates"</h1>
                    <SearchInput
                        value=query
                        on_change=on_search
                        placeholder="Search templates and tags"
                    />
                </Flex>
            </div>
            <div class="page__content catalog-layout">
                <FilterPanel
                    config=config
                    selected=selected
                    on_toggle=on_toggle
                    on_clear=on_clear_facets
                />
                <CatalogResults cards=cards total=total query=query on_clear=on_clear_all />
            </div>
        </PageFrame>
    }
}
