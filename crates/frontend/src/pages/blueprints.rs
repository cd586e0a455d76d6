use crate::layout::global_context::{scroll_to_top, AppGlobalContext};
use crate::shared::components::catalog_card::{to_cards, CardData};
use crate::shared::components::catalog_results::CatalogResults;
use crate::shared::components::catalog_tabs::CatalogTabs;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_solution_spec::{solution_specs, SolutionSpec};
use contracts::domain::a002_solution_build::{solution_builds, SolutionBuild};
use contracts::shared::filter::{FacetRecord, FilterConfig};
use contracts::shared::routes::AppRoute;
use contracts::shared::search::filter_catalog;
use contracts::shared::tabs::{BlueprintTab, CatalogTab, TabState, TabSwitch};
use leptos::prelude::*;
use thaw::*;

fn tab_config(tab: BlueprintTab) -> FilterConfig {
    match tab {
        BlueprintTab::SolutionSpecs => SolutionSpec::filter_config(),
        BlueprintTab::SolutionBuilds => SolutionBuild::filter_config(),
    }
}

fn tab_total(tab: BlueprintTab) -> usize {
    match tab {
        BlueprintTab::SolutionSpecs => solution_specs().len(),
        BlueprintTab::SolutionBuilds => solution_builds().len(),
    }
}

fn tab_cards(state: &TabState<BlueprintTab>) -> Vec<CardData> {
    match state.active {
        BlueprintTab::SolutionSpecs => {
            to_cards(filter_catalog(solution_specs(), &state.filters, &state.query))
        }
        BlueprintTab::SolutionBuilds => {
            to_cards(filter_catalog(solution_builds(), &state.filters, &state.query))
        }
    }
}

/// Marketplaces → Blueprints: вкладки Solution Specs / Solution Builds
#[component]
pub fn BlueprintsPage(#[prop(into)] tab: Signal<BlueprintTab>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = RwSignal::new(TabState::new(tab.get_untracked()));

    // Нормализуем URL: отсутствующий/неизвестный ?tab= заменяется кодом вкладки
    ctx.replace(AppRoute::Blueprints {
        tab: tab.get_untracked(),
    });

    // Маршрут -> состояние: новая вкладка сбрасывает фасеты
    Effect::new(move |_| {
        let next = tab.get();
        let mut switched = TabSwitch::Unchanged;
        state.update(|s| switched = s.switch_to(next));
        if switched == TabSwitch::Switched {
            log::debug!("blueprints: switched to {}", next.code());
            scroll_to_top();
        }
    });

    let active = Signal::derive(move || state.with(|s| s.active));
    let config = Memo::new(move |_| tab_config(active.get()));
    let total = Signal::derive(move || tab_total(active.get()));
    let cards = Memo::new(move |_| state.with(tab_cards));
    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let selected = Signal::derive(move || state.with(|s| s.filters.clone()));

    let on_select = Callback::new(move |next: BlueprintTab| {
        ctx.navigate(AppRoute::Blueprints { tab: next });
    });
    let on_toggle = Callback::new(move |(group, value): (String, String)| {
        state.update(|s| s.filters.toggle(&group, &value));
    });
    let on_clear_facets = Callback::new(move |_: ()| state.update(|s| s.filters.clear()));
    let on_clear_all = Callback::new(move |_: ()| state.update(|s| s.clear_all()));
    let on_search = Callback::new(move |q: String| state.update(|s| s.query = q));
    let on_open = Callback::new(move |id: String| {
        ctx.navigate(AppRoute::BlueprintDetail {
            tab: state.with_untracked(|s| s.active),
            blueprint_id: id,
        });
    });

    view! {
        <PageFrame page_id="blueprints--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h1>"Blueprints"</h1>
                    <SearchInput
                        value=query
                        on_change=on_search
                        placeholder="Search by title, description or technology"
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
