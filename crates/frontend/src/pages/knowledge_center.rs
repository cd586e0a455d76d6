use crate::layout::global_context::{scroll_to_top, AppGlobalContext};
use crate::shared::components::catalog_card::{to_cards, CardData};
use crate::shared::components::catalog_results::CatalogResults;
use crate::shared::components::catalog_tabs::CatalogTabs;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_course::{courses, Course};
use contracts::domain::a005_best_practice::{best_practices, BestPractice};
use contracts::shared::filter::{FacetRecord, FilterConfig};
use contracts::shared::routes::AppRoute;
use contracts::shared::search::filter_catalog;
use contracts::shared::tabs::{CatalogTab, KnowledgeCenterTab, TabState, TabSwitch};
use leptos::prelude::*;
use thaw::*;

fn tab_config(tab: KnowledgeCenterTab) -> FilterConfig {
    match tab {
        KnowledgeCenterTab::Courses => Course::filter_config(),
        KnowledgeCenterTab::BestPractices => BestPractice::filter_config(),
    }
}

fn tab_total(tab: KnowledgeCenterTab) -> usize {
    match tab {
        KnowledgeCenterTab::Courses => courses().len(),
        KnowledgeCenterTab::BestPractices => best_practices().len(),
    }
}

fn tab_cards(state: &TabState<KnowledgeCenterTab>) -> Vec<CardData> {
    match state.active {
        KnowledgeCenterTab::Courses => {
            to_cards(filter_catalog(courses(), &state.filters, &state.query))
        }
        KnowledgeCenterTab::BestPractices => {
            to_cards(filter_catalog(best_practices(), &state.filters, &state.query))
        }
    }
}

/// Knowledge Center: вкладки Courses / Best Practices
#[component]
pub fn KnowledgeCenterPage(#[prop(into)] tab: Signal<KnowledgeCenterTab>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = RwSignal::new(TabState::new(tab.get_untracked()));

    ctx.replace(AppRoute::KnowledgeCenter {
        tab: tab.get_untracked(),
    });

    Effect::new(move |_| {
        let next = tab.get();
        let mut switched = TabSwitch::Unchanged;
        state.update(|s| switched = s.switch_to(next));
        if switched == TabSwitch::Switched {
            log::debug!("knowledge center: switched to {}", next.code());
            scroll_to_top();
        }
    });

    let active = Signal::derive(move || state.with(|s| s.active));
    let config = Memo::new(move |_| tab_config(active.get()));
    let total = Signal::derive(move || tab_total(active.get()));
    let cards = Memo::new(move |_| state.with(tab_cards));
    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let selected = Signal::derive(move || state.with(|s| s.filters.clone()));

    let on_select = Callback::new(move |next: KnowledgeCenterTab| {
        ctx.navigate(AppRoute::KnowledgeCenter { tab: next });
    });
    let on_toggle = Callback::new(move |(group, value): (String, String)| {
        state.update(|s| s.filters.toggle(&group, &value));
    });
    let on_clear_facets = Callback::new(move |_: ()| state.update(|s| s.filters.clear()));
    let on_clear_all = Callback::new(move |_: ()| state.update(|s| s.clear_all()));
    let on_search = Callback::new(move |q: String| state.update(|s| s.query = q));
    // детальная страница есть только у курсов
    let on_open = Callback::new(move |id: String| {
        if state.with_untracked(|s| s.active) == KnowledgeCenterTab::Courses {
            ctx.navigate(AppRoute::CourseDetail { course_id: id });
        }
    });

    view! {
        <PageFrame page_id="knowledge_center--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h1>"Knowledge Center"</h1>
                    <SearchInput
                        value=query
                        on_change=on_search
                        placeholder="Search courses and practices"
                    />
                </Flex>
                <CatalogTabs active=active on_select=on_select />
            </div>
            <div class="page__content catalog-layout">
                <FilterPanel
                    config=config
                    selected=selected
                    on_toggle=on_toggle
                    on_clear=on_clear_facets
                />
                <CatalogResults
                    cards=cards
                    total=total
                    query=query
                    on_open=on_open
                    on_clear=on_clear_all
                />
            </div>
        </PageFrame>
    }
}
