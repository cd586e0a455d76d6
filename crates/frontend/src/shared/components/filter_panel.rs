use contracts::shared::filter::{FacetGroup, FilterConfig, SelectedFilters};
use leptos::prelude::*;
use thaw::*;

/// FilterPanel: группы фасетов с чекбоксами.
///
/// Выбор внутри группы объединяется по ИЛИ, между группами по И; сама
/// фильтрация делается на странице через `filter_catalog`.
#[component]
pub fn FilterPanel(
    /// Схема фасетов активной вкладки
    #[prop(into)]
    config: Signal<FilterConfig>,

    /// Выбранные значения
    #[prop(into)]
    selected: Signal<SelectedFilters>,

    /// (группа, значение): переключить чекбокс
    on_toggle: Callback<(String, String)>,

    /// Сбросить все фасеты
    on_clear: Callback<()>,
) -> impl IntoView {
    let active_count = Memo::new(move |_| selected.with(|s| s.active_count()));

    view! {
        <aside class="filter-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <span class="filter-panel__title">"Filters"</span>
                <Show when=move || { active_count.get() > 0 }>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || active_count.get()}
                    </Badge>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_clear.run(())
                    >
                        "Clear"
                    </Button>
                </Show>
            </Flex>

            <Show when=move || { active_count.get() > 0 }>
                <div class="filter-panel__tags">
                    {move || {
                        selected
                            .with(|s| s.to_query_pairs())
                            .into_iter()
                            .map(|(group, value)| {
                                let label = value.clone();
                                view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_: ()| {
                                            on_toggle.run((group.clone(), value.clone()))
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || {
                config
                    .get()
                    .groups
                    .into_iter()
                    .map(|group| view! { <FilterGroup group=group selected=selected on_toggle=on_toggle /> })
                    .collect_view()
            }}
        </aside>
    }
}

/// Одна группа фасета (сворачиваемая)
#[component]
fn FilterGroup(
    group: FacetGroup,
    selected: Signal<SelectedFilters>,
    on_toggle: Callback<(String, String)>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let FacetGroup {
        key,
        label,
        options,
    } = group;
    let group_key = StoredValue::new(key);

    view! {
        <div class="filter-group">
            <div class="filter-group__title" on:click=move |_| is_expanded.update(|e| *e = !*e)>
                {move || if is_expanded.get() { "▾ " } else { "▸ " }}
                {label}
            </div>
            <Show when=move || is_expanded.get()>
                {options
                    .iter()
                    .cloned()
                    .map(|option| {
                        let value = StoredValue::new(option.clone());
                        let checked = move || {
                            selected.with(|s| {
                                group_key.with_value(|g| value.with_value(|v| s.is_selected(g, v)))
                            })
                        };
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| {
                                        on_toggle.run((group_key.get_value(), value.get_value()))
                                    }
                                />
                                {option}
                            </label>
                        }
                    })
                    .collect_view()}
            </Show>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                style="cursor: pointer;"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                "✕"
            </span>
        </span>
    }
}
