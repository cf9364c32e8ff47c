// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// 常に固定時刻を返すクロック
#[derive(Clone)]
pub struct DummyClock;

impl tsuzuri_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// 呼び出しごとに 1 秒ずつ進むクロック。
/// 公開日時が記事ごとに異なる必要があるフィードのテストで使う。
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl tsuzuri_core::application::ports::time::Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}
