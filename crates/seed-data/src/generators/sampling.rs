//! 随机抽样原语
//!
//! 所有随机性都来自同一个可设种子的 [`SeedRng`]，便于复现。
//! 分布只有三种：均匀整数/浮点、加权分类、伯努利门控。

use std::ops::RangeInclusive;

use rand::distr::Distribution;
use rand::distr::weighted::{Error as WeightError, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// 一次运行共用的随机数源
pub type SeedRng = StdRng;

/// 创建随机数源
///
/// 指定种子时结果可复现，否则使用系统熵。
pub fn seeded_rng(seed: Option<u64>) -> SeedRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// 伯努利门控：以概率 `p` 返回 true
pub fn gate(rng: &mut SeedRng, p: f64) -> bool {
    rng.random_bool(p)
}

/// 从非空常量表中均匀取一个
pub fn pick<T: Copy>(rng: &mut SeedRng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// 不重复抽样
///
/// 抽样数量先在 `amount` 内均匀抽取，再截断到表长，不会超出词表。
pub fn sample_distinct<T: Clone>(
    rng: &mut SeedRng,
    items: &[T],
    amount: RangeInclusive<usize>,
) -> Vec<T> {
    let count = rng.random_range(amount).min(items.len());
    items.choose_multiple(rng, count).cloned().collect()
}

/// 四舍五入到指定小数位
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// 由随机数源生成 v4 UUID
pub fn uuid_v4(rng: &mut SeedRng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

/// 指定长度的随机数字串
pub fn digits(rng: &mut SeedRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// 加权分类分布
///
/// 权重在构造时校验一次，抽样不会失败。
#[derive(Debug, Clone)]
pub struct Weighted<T> {
    items: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Weighted<T> {
    pub fn new(pairs: &[(T, f64)]) -> Result<Self, WeightError> {
        let index = WeightedIndex::new(pairs.iter().map(|(_, weight)| *weight))?;
        Ok(Self {
            items: pairs.iter().map(|(item, _)| *item).collect(),
            index,
        })
    }

    pub fn sample(&self, rng: &mut SeedRng) -> T {
        self.items[self.index.sample(rng)]
    }
}
