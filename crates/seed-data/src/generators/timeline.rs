//! 时间线
//!
//! 在固定的“当前时间”和回溯窗口内抽取有序时间戳链。
//! 当前时间在一次运行中只取一次，配合固定种子即可复现整个数据集。

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::sampling::{SeedRng, gate};
use crate::models::Lifecycle;

/// 时间戳抽样窗口
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    now: DateTime<Utc>,
    lookback: Duration,
}

impl Timeline {
    pub fn new(now: DateTime<Utc>, lookback_days: u32) -> Self {
        Self {
            now,
            lookback: Duration::days(i64::from(lookback_days)),
        }
    }

    /// 以当前时钟为终点
    pub fn starting_now(lookback_days: u32) -> Self {
        Self::new(Utc::now(), lookback_days)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// 回溯窗口起点
    ///
    /// 超出 chrono 可表示范围时截断到最早可表示时间。
    pub fn window_start(&self) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(self.lookback)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// 在 [start, end] 内均匀抽取，微秒精度
    ///
    /// start 不早于 end 时直接返回 start。
    pub fn between(
        &self,
        rng: &mut SeedRng,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DateTime<Utc> {
        if end <= start {
            return start;
        }
        let span = (end - start).num_microseconds().unwrap_or(i64::MAX);
        start
            .checked_add_signed(Duration::microseconds(rng.random_range(0..=span)))
            .map_or(end, |ts| ts.min(end))
    }

    /// 在 [start, now] 内均匀抽取
    pub fn since(&self, rng: &mut SeedRng, start: DateTime<Utc>) -> DateTime<Utc> {
        self.between(rng, start, self.now)
    }

    /// 在整个回溯窗口内抽取创建时间
    pub fn created_at(&self, rng: &mut SeedRng) -> DateTime<Utc> {
        self.between(rng, self.window_start(), self.now)
    }

    /// 抽取完整的生命周期
    ///
    /// updated_at 落在 [created_at, now]，deleted_at 以 `deletion_probability`
    /// 的概率落在 [updated_at, now]。
    pub fn lifecycle(&self, rng: &mut SeedRng, deletion_probability: f64) -> Lifecycle {
        let created_at = self.created_at(rng);
        let updated_at = self.since(rng, created_at);
        let deleted_at = gate(rng, deletion_probability).then(|| self.since(rng, updated_at));

        Lifecycle {
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::sampling::seeded_rng;
    use chrono::TimeZone;

    fn fixed_timeline() -> Timeline {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        Timeline::new(now, 730)
    }

    #[test]
    fn test_window_start() {
        let timeline = fixed_timeline();
        assert_eq!(timeline.now() - timeline.window_start(), Duration::days(730));
    }

    #[test]
    fn test_huge_lookback_does_not_panic() {
        let timeline = Timeline::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), u32::MAX);
        assert_eq!(timeline.window_start(), DateTime::<Utc>::MIN_UTC);

        let mut rng = seeded_rng(Some(5));
        let lifecycle = timeline.lifecycle(&mut rng, 0.5);
        assert!(lifecycle.is_ordered());
        assert!(lifecycle.created_at <= timeline.now());
    }

    #[test]
    fn test_between_stays_in_bounds() {
        let timeline = fixed_timeline();
        let mut rng = seeded_rng(Some(5));
        let start = timeline.window_start();
        for _ in 0..1000 {
            let ts = timeline.between(&mut rng, start, timeline.now());
            assert!(ts >= start && ts <= timeline.now());
        }
    }

    #[test]
    fn test_between_degenerate_range() {
        let timeline = fixed_timeline();
        let mut rng = seeded_rng(Some(5));
        let now = timeline.now();
        assert_eq!(timeline.between(&mut rng, now, now), now);
        assert_eq!(
            timeline.between(&mut rng, now, now - Duration::days(1)),
            now
        );
    }

    #[test]
    fn test_lifecycle_is_ordered() {
        let timeline = fixed_timeline();
        let mut rng = seeded_rng(Some(9));
        for _ in 0..1000 {
            let lifecycle = timeline.lifecycle(&mut rng, 0.5);
            assert!(lifecycle.is_ordered());
            assert!(lifecycle.created_at >= timeline.window_start());
            assert!(lifecycle.deleted_at.unwrap_or(lifecycle.updated_at) <= timeline.now());
        }
    }

    #[test]
    fn test_deletion_probability_extremes() {
        let timeline = fixed_timeline();
        let mut rng = seeded_rng(Some(9));
        assert!((0..100).all(|_| timeline.lifecycle(&mut rng, 0.0).deleted_at.is_none()));
        assert!((0..100).all(|_| timeline.lifecycle(&mut rng, 1.0).deleted_at.is_some()));
    }
}
