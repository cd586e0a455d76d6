use contracts::shared::tabs::CatalogTab;
use leptos::prelude::*;
use thaw::*;

/// Переключатель вкладок каталога.
///
/// Выбранная вкладка приходит из маршрута; клик сообщает новую вкладку
/// наверх, а страница сама решает, как обновить URL.
#[component]
pub fn CatalogTabs<T>(
    #[prop(into)] active: Signal<T>,
    on_select: Callback<T>,
) -> impl IntoView
where
    T: CatalogTab + Send + Sync,
{
    let selected_value = RwSignal::new(active.get_untracked().code().to_string());

    // Маршрут -> TabList
    Effect::new(move |_| {
        let code = active.get().code();
        if selected_value.get_untracked() != code {
            selected_value.set(code.to_string());
        }
    });

    // TabList -> страница
    Effect::new(move |_| {
        let code = selected_value.get();
        if let Some(tab) = T::from_code(&code) {
            if tab != active.get_untracked() {
                on_select.run(tab);
            }
        }
    });

    view! {
        <TabList selected_value=selected_value>
            {T::all()
                .iter()
                .map(|tab| view! { <Tab value=tab.code()>{tab.title()}</Tab> })
                .collect_view()}
        </TabList>
    }
}
