//! 合作方生成器
//!
//! 为名单中每个 partner 角色的用户生成一条合作方记录。
//! 记录内的嵌套结构（文件、服务、城市定价、支付方式、社交链接、项目统计、
//! 看板指标、服务城市）各由一个独立的子生成器产出，互不依赖。

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use super::catalog::{
    CITIES, DOCUMENT_TYPES, PAYMENT_GATES, SERVICE_NAMES, SPECIALIZATIONS, TOP_SERVICES,
};
use super::provider::{FakerProvider, ValueProvider};
use super::sampling::{SeedRng, gate, pick, round_to, sample_distinct, uuid_v4};
use super::timeline::Timeline;
use crate::models::{
    Coordinates, DashboardData, DocumentStatus, Partner, PartnerDocument, PartnerLocation,
    PartnerService, PartnerType, PaymentMethods, PriceUnit, ProjectStats, SocialLinks,
    UserRoster,
};

const COMPANY_NAME_PROBABILITY: f64 = 0.6;
const VERIFIED_PROBABILITY: f64 = 0.7;
const YOUTUBE_PROBABILITY: f64 = 0.3;
const DELETION_PROBABILITY: f64 = 0.1;

/// 合作方生成器
pub struct PartnerGenerator<P: ValueProvider = FakerProvider> {
    provider: P,
    timeline: Timeline,
}

impl PartnerGenerator<FakerProvider> {
    pub fn new(timeline: Timeline) -> Self {
        Self::with_provider(FakerProvider, timeline)
    }
}

impl<P: ValueProvider> PartnerGenerator<P> {
    /// 使用自定义假数据提供者
    pub fn with_provider(provider: P, timeline: Timeline) -> Self {
        Self { provider, timeline }
    }

    /// 为名单中所有 partner 角色的用户各生成一条记录
    ///
    /// 输出顺序与名单顺序一致，数量等于 partner 用户数量。
    pub fn generate_for_roster(&self, rng: &mut SeedRng, roster: &UserRoster) -> Vec<Partner> {
        let partner_ids = roster.partner_ids();
        debug!(
            roster = roster.users.len(),
            partners = partner_ids.len(),
            "筛选 partner 用户"
        );

        partner_ids
            .iter()
            .map(|user_id| self.generate_partner(rng, user_id))
            .collect()
    }

    /// 生成单个合作方记录
    pub fn generate_partner(&self, rng: &mut SeedRng, user_id: &str) -> Partner {
        let company_name =
            gate(rng, COMPANY_NAME_PROBABILITY).then(|| self.provider.company_name(rng));
        let specializations = sample_distinct(rng, &SPECIALIZATIONS, 1..=3)
            .into_iter()
            .map(str::to_string)
            .collect();
        let portfolio_len = rng.random_range(3..=10);
        let portfolio = (0..portfolio_len)
            .map(|_| picsum_url(rng, 800, 600))
            .collect();

        Partner {
            user_id: user_id.to_string(),
            company_name,
            specializations,
            documents: self.generate_documents(rng),
            banner: picsum_url(rng, 1200, 400),
            portfolio,
            experience_years: rng.random_range(1..=30),
            services: self.generate_services(rng),
            location_pricing: generate_location_pricing(rng),
            payment_methods: generate_payment_methods(rng),
            serving_locations: sample_distinct(rng, &CITIES, 1..=5)
                .into_iter()
                .map(|city| city.name.to_string())
                .collect(),
            partner_type: pick(rng, &PartnerType::ALL),
            avg_rating: round_to(rng.random_range(3.0..=5.0), 1),
            verified: gate(rng, VERIFIED_PROBABILITY),
            social_links: self.generate_social_links(rng),
            project_stats: generate_project_stats(rng),
            dashboard_data: generate_dashboard_data(rng),
            partner_locations: self.generate_partner_locations(rng),
            lifecycle: self.timeline.lifecycle(rng, DELETION_PROBABILITY),
        }
    }

    /// 1-4 份认证文件，只有 rejected 状态带驳回原因
    pub fn generate_documents(&self, rng: &mut SeedRng) -> Vec<PartnerDocument> {
        let count = rng.random_range(1..=4);
        (0..count)
            .map(|_| {
                let doc_type = pick(rng, &DOCUMENT_TYPES);
                let status = pick(rng, &DocumentStatus::ALL);
                let file_url = format!("https://example.com/docs/{}.pdf", uuid_v4(rng));
                let rejection_reason =
                    (status == DocumentStatus::Rejected).then(|| self.provider.sentence(rng));

                PartnerDocument {
                    doc_name: format!("{} Document", doc_type),
                    file_url,
                    status,
                    rejection_reason,
                }
            })
            .collect()
    }

    /// 2-6 个服务项目
    pub fn generate_services(&self, rng: &mut SeedRng) -> Vec<PartnerService> {
        let count = rng.random_range(2..=6);
        (0..count)
            .map(|_| {
                let name = pick(rng, &SERVICE_NAMES).to_string();
                PartnerService {
                    service_id: uuid_v4(rng),
                    name,
                    description: self.provider.paragraph(rng, 2..3),
                    base_price: rng.random_range(500..=50_000),
                    price_unit: pick(rng, &PriceUnit::ALL),
                }
            })
            .collect()
    }

    /// 所有社交链接共用同一个用户名，youtube 可选
    pub fn generate_social_links(&self, rng: &mut SeedRng) -> SocialLinks {
        let username = self.provider.username(rng);
        let youtube = gate(rng, YOUTUBE_PROBABILITY)
            .then(|| format!("https://youtube.com/{}", username));

        SocialLinks {
            website: format!("https://{}.photography.com", username),
            instagram: format!("https://instagram.com/{}", username),
            facebook: format!("https://facebook.com/{}", username),
            x: format!("https://x.com/{}", username),
            pinterest: format!("https://pinterest.com/{}", username),
            youtube,
        }
    }

    /// 1-3 个不重复的服务城市，每城 1-3 个邮编
    pub fn generate_partner_locations(&self, rng: &mut SeedRng) -> Vec<PartnerLocation> {
        sample_distinct(rng, &CITIES, 1..=3)
            .into_iter()
            .map(|city| {
                let pin_count = rng.random_range(1..=3);
                PartnerLocation {
                    city: city.name.to_string(),
                    state: city.state.to_string(),
                    coordinates: Coordinates {
                        lat: city.lat,
                        lng: city.lng,
                    },
                    pin_codes_served: (0..pin_count)
                        .map(|_| self.provider.postcode(rng))
                        .collect(),
                }
            })
            .collect()
    }
}

/// 1-4 个不重复城市的定价
pub fn generate_location_pricing(rng: &mut SeedRng) -> BTreeMap<String, u32> {
    sample_distinct(rng, &CITIES, 1..=4)
        .into_iter()
        .map(|city| (city.name.to_string(), rng.random_range(1_000..=50_000)))
        .collect()
}

/// 每种支付方式独立门控，首选方式从已选集合中均匀抽取
pub fn generate_payment_methods(rng: &mut SeedRng) -> PaymentMethods {
    let methods: Vec<_> = PAYMENT_GATES
        .iter()
        .filter(|(_, p)| gate(rng, *p))
        .map(|(method, _)| *method)
        .collect();
    let preferred = (!methods.is_empty()).then(|| pick(rng, &methods));

    PaymentMethods { methods, preferred }
}

/// ongoing = max(0, total - completed - slack)
pub fn generate_project_stats(rng: &mut SeedRng) -> ProjectStats {
    let total: u32 = rng.random_range(5..=200);
    let completed = rng.random_range(3..=total);
    let slack: u32 = rng.random_range(0..=5);

    ProjectStats {
        total,
        completed,
        ongoing: (total - completed).saturating_sub(slack),
    }
}

pub fn generate_dashboard_data(rng: &mut SeedRng) -> DashboardData {
    DashboardData {
        views: rng.random_range(100..=10_000),
        leads: rng.random_range(5..=200),
        conversion_rate: round_to(rng.random_range(0.1..=0.5), 2),
        revenue: rng.random_range(5_000..=500_000),
        top_services: sample_distinct(rng, &TOP_SERVICES, 1..=3)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

fn picsum_url(rng: &mut SeedRng, width: u32, height: u32) -> String {
    format!(
        "https://picsum.photos/{}/{}?random={}",
        width,
        height,
        rng.random_range(1..=1000)
    )
}
