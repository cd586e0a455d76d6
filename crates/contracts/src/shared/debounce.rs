//! Модель debounce для поискового ввода.
//!
//! Каждое новое значение отменяет ожидающее и переназначает срок. Время
//! передаётся снаружи в миллисекундах, поэтому модель одинаково работает с
//! таймерами браузера и в тестах.

/// Задержка применения поискового запроса
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at_ms: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Новое значение заменяет ожидающее; срок отсчитывается заново
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            due_at_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Забрать значение, если период тишины истёк
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Срок срабатывания ожидающего значения
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }

    /// Сколько ждать до следующего `poll`; не меньше 1 мс, пока значение ожидает.
    /// Таймер браузера может сработать раньше срока по часам `Date.now()`.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.pending
            .as_ref()
            .map(|p| p.due_at_ms.saturating_sub(now_ms).max(1))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Отмена без применения (например, при размонтировании)
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_keystrokes_apply_once() {
        let mut debouncer = Debouncer::default();
        let mut applied = Vec::new();

        for (at, text) in [(0, "K"), (80, "Ko"), (160, "Kon"), (240, "Kong")] {
            if let Some(v) = debouncer.poll(at) {
                applied.push(v);
            }
            debouncer.push(text.to_string(), at);
        }

        // тикаем каждые 10 мс до конца периода тишины
        for now in (250..=1000).step_by(10) {
            if let Some(v) = debouncer.poll(now) {
                applied.push(v);
            }
        }

        assert_eq!(applied, vec!["Kong".to_string()]);
    }

    #[test]
    fn test_fires_only_after_quiet_period() {
        let mut debouncer = Debouncer::new(300);
        debouncer.push("kong", 1_000);
        assert_eq!(debouncer.due_at(), Some(1_300));
        assert_eq!(debouncer.poll(1_299), None);
        assert_eq!(debouncer.poll(1_300), Some("kong"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(2_000), None);
    }

    #[test]
    fn test_early_timer_rearms_until_due() {
        let mut debouncer = Debouncer::new(300);
        debouncer.push("Kong", 1_000);

        // таймер сработал на 1 мс раньше
        assert_eq!(debouncer.poll(1_299), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.remaining_ms(1_299), Some(1));

        assert_eq!(debouncer.poll(1_300), Some("Kong"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.remaining_ms(1_300), None);
    }

    #[test]
    fn test_clock_step_back_keeps_value_pending() {
        let mut debouncer = Debouncer::new(300);
        debouncer.push("Kong", 5_000);

        // часы отступили на 2 секунды до срабатывания таймера
        assert_eq!(debouncer.poll(3_000), None);
        let wait = debouncer.remaining_ms(3_000).unwrap();
        assert_eq!(wait, 2_300);
        assert_eq!(debouncer.poll(3_000 + wait), Some("Kong"));
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(300);
        debouncer.push("kong", 0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(10_000), None);
    }
}
