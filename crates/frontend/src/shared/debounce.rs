//! Отложенное применение значения (debounce) без привязки к таймеру.
//!
//! `Debounced<T>` хранит применённое значение и не более одного ожидающего.
//! Каждый `push` заменяет ожидающее значение и перезапускает задержку, так что
//! применяется только последнее значение после паузы. Источник времени
//! выбирает вызывающая сторона:
//!
//! - таймер: `push` возвращает `DebounceTicket`, через `ticket.delay_ms`
//!   вызывается `fire(ticket)`; устаревшие тикеты игнорируются;
//! - часы: `poll(now_ms)` применяет значение, если срок истёк.
//!
//! ```rust
//! use catalog_frontend::shared::debounce::Debounced;
//!
//! let mut search = Debounced::new(String::new(), 300);
//! let ticket = search.push("lam".to_string(), 0.0);
//! let ticket = search.push("lamp".to_string(), 120.0);
//! assert!(search.fire(ticket));
//! assert_eq!(search.settled(), "lamp");
//! ```

/// Квитанция на отложенное применение значения
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceTicket {
    generation: u64,
    pub delay_ms: u32,
    pub due_at_ms: f64,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    generation: u64,
    due_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay_ms: u32,
    settled: T,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Debounced<T> {
    pub fn new(initial: T, delay_ms: u32) -> Self {
        Self {
            delay_ms,
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Последнее применённое значение
    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Поставить значение в ожидание, отменив предыдущее
    pub fn push(&mut self, value: T, now_ms: f64) -> DebounceTicket {
        self.generation += 1;
        let due_at_ms = now_ms + f64::from(self.delay_ms);
        self.pending = Some(Pending {
            value,
            generation: self.generation,
            due_at_ms,
        });
        DebounceTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
            due_at_ms,
        }
    }

    /// Срабатывание таймера. Применяет значение, только если тикет последний.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        let is_latest =
            matches!(&self.pending, Some(pending) if pending.generation == ticket.generation);
        is_latest && self.commit()
    }

    /// Применить ожидающее значение, если наступил срок
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let is_due = matches!(&self.pending, Some(pending) if now_ms >= pending.due_at_ms);
        is_due && self.commit()
    }

    /// Немедленно заменить значение, отбросив ожидающее
    pub fn reset(&mut self, value: T) {
        self.generation += 1;
        self.pending = None;
        self.settled = value;
    }

    fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.settled = pending.value;
                true
            }
            None => false,
        }
    }
}

/// Единственный активный таймер задержки.
///
/// `arm` заменяет предыдущий хэндл, и тот освобождается. Для
/// `gloo_timers::callback::Timeout` освобождение отменяет таймер.
#[derive(Debug)]
pub struct PendingTimer<H> {
    handle: Option<H>,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingTimer<H> {
    pub fn arm(&mut self, handle: H) {
        drop(self.handle.replace(handle));
    }

    pub fn cancel(&mut self) {
        drop(self.handle.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Хэндл, считающий освобождения
    struct CountedHandle(Rc<Cell<usize>>);

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_only_trailing_value_is_applied() {
        let mut d = Debounced::new(String::new(), 300);
        let first = d.push("w".to_string(), 0.0);
        let second = d.push("wi".to_string(), 100.0);
        let last = d.push("widget".to_string(), 250.0);

        assert!(!d.fire(first));
        assert!(!d.fire(second));
        assert_eq!(d.settled(), "");

        assert!(d.fire(last));
        assert_eq!(d.settled(), "widget");
        assert!(!d.is_pending());
        // повторное срабатывание ничего не меняет
        assert!(!d.fire(last));
    }

    #[test]
    fn test_poll_waits_for_quiet_period() {
        let mut d = Debounced::new(0_u32, 300);
        d.push(1, 0.0);
        d.push(2, 200.0);

        assert!(!d.poll(300.0));
        assert!(!d.poll(499.0));
        assert_eq!(*d.settled(), 0);

        assert!(d.poll(500.0));
        assert_eq!(*d.settled(), 2);
        assert!(!d.poll(10_000.0));
    }

    #[test]
    fn test_reset_drops_pending_value() {
        let mut d = Debounced::new("a", 300);
        let ticket = d.push("b", 0.0);
        d.reset("");

        assert!(!d.fire(ticket));
        assert!(!d.poll(1_000.0));
        assert_eq!(*d.settled(), "");
    }

    #[test]
    fn test_ticket_reports_deadline() {
        let mut d = Debounced::new((), 300);
        let ticket = d.push((), 1_000.0);
        assert_eq!(ticket.delay_ms, 300);
        assert_eq!(ticket.due_at_ms, 1_300.0);
    }

    #[test]
    fn test_rearming_releases_previous_timer() {
        let released = Rc::new(Cell::new(0));
        let mut slot = PendingTimer::default();

        // четыре нажатия: каждое новое освобождает предыдущий таймер
        for _ in 0..4 {
            slot.arm(CountedHandle(released.clone()));
        }
        assert_eq!(released.get(), 3);

        slot.cancel();
        assert_eq!(released.get(), 4);

        slot.cancel();
        assert_eq!(released.get(), 4);
    }
}
