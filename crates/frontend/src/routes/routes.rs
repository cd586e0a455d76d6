use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::pages::blueprints::BlueprintsPage;
use crate::pages::home::HomePage;
use crate::pages::knowledge_center::KnowledgeCenterPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::templates::TemplatesPage;
use crate::projections::p100_blueprint_detail::ui::details::BlueprintDetailPage;
use crate::projections::p101_course_detail::ui::details::CourseDetailPage;
use contracts::shared::routes::AppRoute;
use contracts::shared::tabs::{BlueprintTab, CatalogTab, KnowledgeCenterTab};
use leptos::prelude::*;

/// Ключ страницы: смена вкладки внутри одной страницы её не пересоздаёт,
/// поэтому поисковый запрос переживает переключение вкладок.
fn page_key(route: &AppRoute) -> AppRoute {
    match route {
        AppRoute::Blueprints { .. } => AppRoute::Blueprints {
            tab: BlueprintTab::default_tab(),
        },
        AppRoute::KnowledgeCenter { .. } => AppRoute::KnowledgeCenter {
            tab: KnowledgeCenterTab::default_tab(),
        },
        other => other.clone(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let page = Memo::new(move |_| ctx.route.with(page_key));

    let blueprint_tab = Signal::derive(move || match ctx.route.get() {
        AppRoute::Blueprints { tab } => tab,
        _ => BlueprintTab::default_tab(),
    });
    let knowledge_tab = Signal::derive(move || match ctx.route.get() {
        AppRoute::KnowledgeCenter { tab } => tab,
        _ => KnowledgeCenterTab::default_tab(),
    });

    view! {
        <Shell>
            {move || match page.get() {
                AppRoute::Home => view! { <HomePage /> }.into_any(),
                AppRoute::Blueprints { .. } => view! { <BlueprintsPage tab=blueprint_tab /> }.into_any(),
                AppRoute::BlueprintDetail { tab, blueprint_id } => {
                    view! { <BlueprintDetailPage tab=tab blueprint_id=blueprint_id /> }.into_any()
                }
                AppRoute::Templates => view! { <TemplatesPage /> }.into_any(),
                AppRoute::KnowledgeCenter { .. } => {
                    view! { <KnowledgeCenterPage tab=knowledge_tab /> }.into_any()
                }
                AppRoute::CourseDetail { course_id } => {
                    view! { <CourseDetailPage course_id=course_id /> }.into_any()
                }
                AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_of_one_page_share_a_key() {
        let specs = AppRoute::Blueprints {
            tab: BlueprintTab::SolutionSpecs,
        };
        let builds = AppRoute::Blueprints {
            tab: BlueprintTab::SolutionBuilds,
        };
        assert_eq!(page_key(&specs), page_key(&builds));

        let detail = AppRoute::CourseDetail {
            course_id: "crs-001".into(),
        };
        assert_eq!(page_key(&detail), detail);
    }
}
