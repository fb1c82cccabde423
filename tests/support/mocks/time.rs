// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use gardenworks::application::ports::time::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// テストの基準時刻
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
}

/// 呼び出しごとに 1 秒進む時計。作成順と `created_at` の順序が一致する。
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl TickingClock {
    /// 時計を任意の秒数だけ進める（セッション期限切れの検証用）
    pub fn advance(&self, seconds: i64) {
        self.ticks.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
