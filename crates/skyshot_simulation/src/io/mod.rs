//! IoContext — очередь фоновых задач, опрашиваемая каждый кадр
//!
//! Сейчас никто не ставит задачи (сетевого кода нет), poll просто
//! проходит по пустой очереди. Задачи выполняются на main thread
//! внутри poll, без блокировок.

use bevy::prelude::*;
use std::collections::VecDeque;

type Job = Box<dyn FnOnce() + Send + Sync>;

#[derive(Resource, Default)]
pub struct IoContext {
    pending: VecDeque<Job>,
    completed: u64,
}

impl IoContext {
    pub fn post(&mut self, job: impl FnOnce() + Send + Sync + 'static) {
        self.pending.push_back(Box::new(job));
    }

    /// Выполнить все задачи, поставленные до вызова. Возвращает их число
    ///
    /// Задачи, поставленные во время poll, ждут следующего кадра.
    pub fn poll(&mut self) -> usize {
        let ready = self.pending.len();
        for _ in 0..ready {
            if let Some(job) = self.pending.pop_front() {
                job();
            }
        }
        self.completed += ready as u64;
        ready
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }
}

/// Система: poll io context (каждый кадр)
pub fn poll_io_context(mut io: ResMut<IoContext>) {
    io.poll();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_poll_empty_is_noop() {
        let mut io = IoContext::default();
        assert_eq!(io.poll(), 0);
        assert_eq!(io.completed(), 0);
    }

    #[test]
    fn test_poll_runs_posted_jobs_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut io = IoContext::default();

        for _ in 0..3 {
            let counter = counter.clone();
            io.post(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(io.pending(), 3);
        assert_eq!(io.poll(), 3);
        assert_eq!(io.poll(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(io.completed(), 3);
    }
}
