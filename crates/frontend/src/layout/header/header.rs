use crate::layout::global_context::AppGlobalContext;
use contracts::shared::routes::AppRoute;
use contracts::shared::tabs::{BlueprintTab, CatalogTab, KnowledgeCenterTab};
use leptos::prelude::*;

/// Раздел верхнего меню, к которому относится маршрут
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Blueprints,
    Templates,
    KnowledgeCenter,
}

impl Section {
    fn of(route: &AppRoute) -> Option<Self> {
        match route {
            AppRoute::Blueprints { .. } | AppRoute::BlueprintDetail { .. } => Some(Section::Blueprints),
            AppRoute::Templates => Some(Section::Templates),
            AppRoute::KnowledgeCenter { .. } | AppRoute::CourseDetail { .. } => {
                Some(Section::KnowledgeCenter)
            }
            AppRoute::Home | AppRoute::NotFound { .. } => None,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Section::Blueprints => "Blueprints",
            Section::Templates => "Templates",
            Section::KnowledgeCenter => "Knowledge Center",
        }
    }

    fn entry(&self) -> AppRoute {
        match self {
            Section::Blueprints => AppRoute::Blueprints {
                tab: BlueprintTab::default_tab(),
            },
            Section::Templates => AppRoute::Templates,
            Section::KnowledgeCenter => AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::default_tab(),
            },
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let active = Memo::new(move |_| ctx.route.with(Section::of));

    view! {
        <header data-zone="header" class="header">
            <span class="header__title" on:click=move |_| ctx.navigate(AppRoute::Home)>
                "DTMP"
            </span>
            <nav class="header__nav">
                {[Section::Blueprints, Section::Templates, Section::KnowledgeCenter]
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == Some(section) {
                                        "header__link header__link--active"
                                    } else {
                                        "header__link"
                                    }
                                }
                                on:click=move |_| ctx.navigate(section.entry())
                            >
                                {section.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
