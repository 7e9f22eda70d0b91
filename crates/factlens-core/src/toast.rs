//! Transient notification with a per-show dismiss timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub generation: u64,
}

#[derive(Debug)]
pub struct ToastNotifier {
    duration: Duration,
    generation: u64,
    current: Option<Toast>,
    timer: Option<JoinHandle<()>>,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            current: None,
            timer: None,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace the visible toast and restart the dismiss timer.
    ///
    /// `make` builds the expiry event for the new generation.
    pub fn show<E, F>(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        tx: &mpsc::Sender<E>,
        make: F,
    ) -> u64
    where
        E: Send + 'static,
        F: FnOnce(u64) -> E,
    {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation += 1;
        let generation = self.generation;
        self.current = Some(Toast {
            message: message.into(),
            kind,
            generation,
        });

        let event = make(generation);
        let tx = tx.clone();
        let duration = self.duration;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(event).await;
        }));
        generation
    }

    /// Dismiss if `generation` is still the visible toast.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                self.timer = None;
                true
            }
            _ => false,
        }
    }
}

impl Drop for ToastNotifier {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn second_show_resets_the_timer() {
        let (tx, mut rx) = mpsc::channel::<u64>(4);
        let mut toasts = ToastNotifier::new(Duration::from_millis(3000));

        let first = toasts.show("first", ToastKind::Error, &tx, |g| g);
        tokio::time::sleep(Duration::from_millis(2000)).await;
        let second = toasts.show("second", ToastKind::Success, &tx, |g| g);

        // The first timer would have fired at 3000ms.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("second"));
        assert!(!toasts.expire(first));

        tokio::time::sleep(Duration::from_millis(2000)).await;
        let fired = rx.try_recv().unwrap();
        assert_eq!(fired, second);
        assert!(toasts.expire(fired));
        assert!(toasts.current().is_none());
    }
}
