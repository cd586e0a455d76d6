use crate::layout::global_context::AppGlobalContext;
use crate::pages::not_found::NotFoundPage;
use crate::projections::source_label;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::usecases::u001_request_document::view::RequestDocument;
use contracts::projections::p100_blueprint_detail::{get_blueprint_detail, BlueprintDetail};
use contracts::shared::routes::AppRoute;
use contracts::shared::tabs::BlueprintTab;
use leptos::prelude::*;
use thaw::*;

/// Страница blueprint по маршруту `/marketplaces/blueprints/:tab/:id`
#[component]
pub fn BlueprintDetailPage(tab: BlueprintTab, blueprint_id: String) -> impl IntoView {
    let route = AppRoute::BlueprintDetail {
        tab,
        blueprint_id: blueprint_id.clone(),
    };

    match get_blueprint_detail(&blueprint_id) {
        Some(detail) => {
            log::debug!("blueprint {}: {:?}", detail.id, detail.source);
            view! { <BlueprintDetailView detail=detail back=route.listing() /> }.into_any()
        }
        None => view! { <NotFoundPage path=route.to_url() back=route.listing() /> }.into_any(),
    }
}

#[component]
fn BlueprintDetailView(detail: BlueprintDetail, back: AppRoute) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let section = RwSignal::new("overview".to_string());
    let BlueprintDetail {
        id,
        title,
        source,
        summary,
        overview,
        phases,
        layers,
        components,
        technologies,
        outcomes,
        ..
    } = detail;
    let document_title = title.clone();
    let technologies = StoredValue::new(technologies);

    view! {
        <PageFrame page_id="p100_blueprint_detail--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.navigate(back.clone())
                    >
                        "← Back to Blueprints"
                    </Button>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {source_label(source)}
                    </Badge>
                </Flex>
                <h1>{title}</h1>
                <p>{summary}</p>
                <TabList selected_value=section>
                    <Tab value="overview">"Overview"</Tab>
                    <Tab value="architecture">"Architecture"</Tab>
                    <Tab value="delivery">"Delivery"</Tab>
                </TabList>
            </div>

            <div class="page__content">
                <Show when=move || section.get() == "overview">
                    <ul>{overview.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}</ul>
                    <h3>"Technologies"</h3>
                    <Flex gap=FlexGap::Small>
                        {technologies.with_value(|technologies| {
                            technologies
                                .iter()
                                .map(|t| view! { <span class="filter-tag">{t.clone()}</span> })
                                .collect_view()
                        })}
                    </Flex>
                    <h3>"Outcomes"</h3>
                    <ul>{outcomes.iter().map(|o| view! { <li>{o.clone()}</li> }).collect_view()}</ul>
                </Show>

                <Show when=move || section.get() == "architecture">
                    {layers
                        .iter()
                        .map(|layer| view! {
                            <div class="catalog-card">
                                <h3>{layer.name.clone()}</h3>
                                <p>{layer.description.clone()}</p>
                                <ul>
                                    {layer.components.iter().map(|c| view! { <li>{c.clone()}</li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                    <h3>"Component list"</h3>
                    <ul>{components.iter().map(|c| view! { <li>{c.clone()}</li> }).collect_view()}</ul>
                </Show>

                <Show when=move || section.get() == "delivery">
                    {phases
                        .clone()
                        .into_iter()
                        .map(|phase| view! {
                            <div class="catalog-card">
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <h3>{phase.name.clone()}</h3>
                                    <span>{phase.duration.clone()}</span>
                                </Flex>
                                <ul>
                                    {phase.activities.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </Show>

                <RequestDocument document_id=id document_title=document_title />
            </div>
        </PageFrame>
    }
}
