/// Утилиты для страниц-списков: подсветка совпадений и поиск с debounce
use contracts::shared::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use contracts::shared::search::normalize_query;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::now_ms;

/// Участки текста: (фрагмент, совпал ли он с запросом)
pub fn split_matches(text: &str, query: &str) -> Vec<(String, bool)> {
    let Some(needle) = normalize_query(query) else {
        return vec![(text.to_string(), false)];
    };

    let haystack = text.to_lowercase();
    // to_lowercase может менять длину (не-ASCII), тогда смещения не совпадут
    if haystack.len() != text.len() || !haystack.contains(&needle) {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    split_matches(text, query)
        .into_iter()
        .map(|(part, matched)| {
            if matched {
                view! { <span class="search-highlight">{part}</span> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Запланировать применение ожидающего запроса.
///
/// Новый `Timeout` заменяет старый (drop отменяет его). Если таймер сработал
/// раньше срока по `Date.now()`, таймер ставится заново на остаток.
fn arm_search_timer(
    debouncer: StoredValue<Debouncer<String>, LocalStorage>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    on_change: Callback<String>,
    delay_ms: u64,
) {
    let timeout = Timeout::new(delay_ms.min(u64::from(u32::MAX)) as u32, move || {
        let now = now_ms();
        let mut ready = None;
        let mut remaining = None;
        debouncer.update_value(|d| {
            ready = d.poll(now);
            remaining = d.remaining_ms(now);
        });
        if let Some(text) = ready {
            on_change.run(text);
        } else if let Some(wait) = remaining {
            arm_search_timer(debouncer, timer, on_change, wait);
        }
    });
    timer.set_value(Some(timeout));
}

/// Компонент поиска с debounce и кнопкой очистки.
///
/// `on_change` получает значение только после 300 мс тишины; очистка
/// применяется сразу. Ожидающий таймер живёт в `StoredValue` компонента и
/// отменяется при его размонтировании (drop `Timeout`).
#[component]
pub fn SearchInput(
    /// Применённое значение (после debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debouncer = StoredValue::new_local(Debouncer::<String>::new(SEARCH_DEBOUNCE_MS));
    let timer = StoredValue::new_local(None::<Timeout>);

    // Внешний сброс ("Clear filters") должен очистить и поле ввода
    Effect::new(move |_| {
        let applied = value.get();
        if !debouncer.with_value(|d| d.is_pending()) {
            set_input_value.set(applied);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.update_value(|d| d.push(new_value, now_ms()));

        let delay = debouncer.with_value(|d| d.delay_ms());
        arm_search_timer(debouncer, timer, on_change, delay);
    };

    let clear_filter = move |_| {
        timer.set_value(None);
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || normalize_query(&value.get()).is_some();

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 320px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; color: #666; line-height: 1;"
                    on:click=clear_filter
                    title="Clear"
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_marks_every_occurrence() {
        let parts = split_matches("Kong gateway on kong", "KONG");
        assert_eq!(
            parts,
            vec![
                ("Kong".to_string(), true),
                (" gateway on ".to_string(), false),
                ("kong".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_split_matches_without_query() {
        assert_eq!(
            split_matches("Data Mesh", "  "),
            vec![("Data Mesh".to_string(), false)]
        );
        assert_eq!(
            split_matches("Data Mesh", "lake"),
            vec![("Data Mesh".to_string(), false)]
        );
    }
}
