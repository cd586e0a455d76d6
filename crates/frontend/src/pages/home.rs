use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::domain::a001_solution_spec::solution_specs;
use contracts::domain::a002_solution_build::solution_builds;
use contracts::domain::a003_template::templates;
use contracts::domain::a004_course::courses;
use contracts::domain::a005_best_practice::best_practices;
use contracts::shared::catalog::CatalogKind;
use contracts::shared::routes::AppRoute;
use contracts::shared::tabs::{BlueprintTab, CatalogTab, KnowledgeCenterTab};
use leptos::prelude::*;
use thaw::*;

fn catalog_entry(kind: CatalogKind) -> (AppRoute, usize) {
    match kind {
        CatalogKind::Blueprints => (
            AppRoute::Blueprints {
                tab: BlueprintTab::default_tab(),
            },
            solution_specs().len() + solution_builds().len(),
        ),
        CatalogKind::Templates => (AppRoute::Templates, templates().len()),
        CatalogKind::KnowledgeCenter => (
            AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::default_tab(),
            },
            courses().len() + best_practices().len(),
        ),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <h1>"Digital Transformation Management Platform"</h1>
            <div class="catalog-grid">
                {CatalogKind::all()
                    .into_iter()
                    .map(|kind| {
                        let (route, count) = catalog_entry(kind);
                        view! {
                            <div class="catalog-card" on:click=move |_| ctx.navigate(route.clone())>
                                <h3>{kind.display_name()}</h3>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    {format!("{} items", count)}
                                </Badge>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
