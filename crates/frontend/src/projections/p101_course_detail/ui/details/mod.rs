use crate::layout::global_context::AppGlobalContext;
use crate::pages::not_found::NotFoundPage;
use crate::projections::source_label;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::projections::p101_course_detail::{get_course_detail, CourseDetail};
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

/// Страница курса по маршруту `/knowledge-center/courses/:courseId`
#[component]
pub fn CourseDetailPage(course_id: String) -> impl IntoView {
    let route = AppRoute::CourseDetail {
        course_id: course_id.clone(),
    };

    match get_course_detail(&course_id) {
        Some(detail) => view! { <CourseDetailView detail=detail back=route.listing() /> }.into_any(),
        None => view! { <NotFoundPage path=route.to_url() back=route.listing() /> }.into_any(),
    }
}

#[component]
fn CourseDetailView(detail: CourseDetail, back: AppRoute) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let total_hours: u32 = detail.modules.iter().map(|m| m.duration_hours).sum();

    view! {
        <PageFrame page_id="p101_course_detail--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.navigate(back.clone())
                    >
                        "← Back to Courses"
                    </Button>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {source_label(detail.source)}
                    </Badge>
                </Flex>
                <h1>{detail.title.clone()}</h1>
                <span>{format!("{} · {} hours", detail.provider, total_hours)}</span>
                <p>{detail.summary.clone()}</p>
                {detail.certification.clone().map(|cert| view! {
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>{cert}</Badge>
                })}
            </div>

            <div class="page__content">
                <h3>"Modules"</h3>
                {detail
                    .modules
                    .into_iter()
                    .map(|module| view! {
                        <div class="catalog-card">
                            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                <h4>{module.title.clone()}</h4>
                                <span>{format!("{} h", module.duration_hours)}</span>
                            </Flex>
                            <ul>
                                {module.lessons.iter().map(|l| view! { <li>{l.clone()}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}

                <h3>"What you will learn"</h3>
                <ul>{detail.outcomes.iter().map(|o| view! { <li>{o.clone()}</li> }).collect_view()}</ul>

                {(!detail.prerequisites.is_empty()).then(|| view! { <h3>"Prerequisites"</h3> })}
                <ul>{detail.prerequisites.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}</ul>
            </div>
        </PageFrame>
    }
}
