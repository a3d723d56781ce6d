//! 合作方模型
//!
//! 合作方记录以用户 ID 为键，每个 partner 角色的用户对应一条记录。
//! 嵌套结构各自独立生成，彼此之间没有依赖。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lifecycle::Lifecycle;

/// 合作方记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub user_id: String,
    pub company_name: Option<String>,
    pub specializations: Vec<String>,
    pub documents: Vec<PartnerDocument>,
    pub banner: String,
    pub portfolio: Vec<String>,
    pub experience_years: u32,
    pub services: Vec<PartnerService>,
    /// 城市 -> 价格
    pub location_pricing: BTreeMap<String, u32>,
    pub payment_methods: PaymentMethods,
    pub serving_locations: Vec<String>,
    pub partner_type: PartnerType,
    pub avg_rating: f64,
    pub verified: bool,
    pub social_links: SocialLinks,
    pub project_stats: ProjectStats,
    pub dashboard_data: DashboardData,
    pub partner_locations: Vec<PartnerLocation>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

/// 认证文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerDocument {
    pub doc_name: String,
    pub file_url: String,
    pub status: DocumentStatus,
    pub rejection_reason: Option<String>,
}

impl PartnerDocument {
    /// 仅 rejected 状态带驳回原因
    pub fn is_consistent(&self) -> bool {
        (self.status == DocumentStatus::Rejected) == self.rejection_reason.is_some()
    }
}

/// 文件审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];
}

/// 服务项目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerService {
    pub service_id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: u32,
    pub price_unit: PriceUnit,
}

/// 计价单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    PerHour,
    PerDay,
    PerProject,
}

impl PriceUnit {
    pub const ALL: [PriceUnit; 3] = [Self::PerHour, Self::PerDay, Self::PerProject];
}

/// 支付方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    BankTransfer,
    Cash,
}

/// 支持的支付方式集合及首选方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethods {
    pub methods: Vec<PaymentMethod>,
    pub preferred: Option<PaymentMethod>,
}

impl PaymentMethods {
    /// preferred 为空当且仅当 methods 为空，否则 preferred 属于 methods
    pub fn is_consistent(&self) -> bool {
        match self.preferred {
            None => self.methods.is_empty(),
            Some(preferred) => self.methods.contains(&preferred),
        }
    }
}

/// 合作方类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Studio,
    Solo,
    Firm,
    Partnership,
}

impl PartnerType {
    pub const ALL: [PartnerType; 4] = [Self::Studio, Self::Solo, Self::Firm, Self::Partnership];
}

/// 社交媒体链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub x: String,
    pub pinterest: String,
    pub youtube: Option<String>,
}

/// 项目统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: u32,
    pub completed: u32,
    pub ongoing: u32,
}

impl ProjectStats {
    /// completed <= total，且 completed + ongoing 不超过 total
    pub fn is_consistent(&self) -> bool {
        self.completed <= self.total && self.ongoing <= self.total - self.completed
    }
}

/// 看板指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub views: u32,
    pub leads: u32,
    pub conversion_rate: f64,
    pub revenue: u32,
    pub top_services: Vec<String>,
}

/// 服务城市
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerLocation {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
    pub pin_codes_served: Vec<String>,
}

/// 经纬度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// 合作方数据集文件的顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerDataset {
    pub partners: Vec<Partner>,
}
