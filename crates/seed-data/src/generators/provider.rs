//! 假数据提供者
//!
//! 把生成器需要的假数据能力收敛为一个 trait，默认实现基于 fake crate。
//! 所有方法都从传入的随机数源取值，保证同一种子下结果一致。

use std::ops::Range;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, PostCode, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;

use super::sampling::SeedRng;

/// 假数据能力边界
pub trait ValueProvider {
    fn person_name(&self, rng: &mut SeedRng) -> String;

    /// 单行地址
    fn address(&self, rng: &mut SeedRng) -> String;

    fn sentence(&self, rng: &mut SeedRng) -> String;

    /// 句子数量在 `sentences` 范围内
    fn paragraph(&self, rng: &mut SeedRng, sentences: Range<usize>) -> String;

    fn username(&self, rng: &mut SeedRng) -> String;

    fn email(&self, rng: &mut SeedRng) -> String;

    fn postcode(&self, rng: &mut SeedRng) -> String;

    fn company_name(&self, rng: &mut SeedRng) -> String;
}

/// 基于 fake crate 的英文提供者
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerProvider;

impl ValueProvider for FakerProvider {
    fn person_name(&self, rng: &mut SeedRng) -> String {
        Name().fake_with_rng(rng)
    }

    fn address(&self, rng: &mut SeedRng) -> String {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);
        format!("{} {}, {}, {} {}", building, street, city, state, zip)
    }

    fn sentence(&self, rng: &mut SeedRng) -> String {
        Sentence(4..10).fake_with_rng(rng)
    }

    fn paragraph(&self, rng: &mut SeedRng, sentences: Range<usize>) -> String {
        Paragraph(sentences).fake_with_rng(rng)
    }

    fn username(&self, rng: &mut SeedRng) -> String {
        Username().fake_with_rng(rng)
    }

    fn email(&self, rng: &mut SeedRng) -> String {
        FreeEmail().fake_with_rng(rng)
    }

    fn postcode(&self, rng: &mut SeedRng) -> String {
        PostCode().fake_with_rng(rng)
    }

    fn company_name(&self, rng: &mut SeedRng) -> String {
        CompanyName().fake_with_rng(rng)
    }
}
