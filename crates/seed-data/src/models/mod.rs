//! 数据模型
//!
//! 用户与合作方数据集的记录结构，字段形态即输出 JSON 的形态。

pub mod lifecycle;
pub mod partner;
pub mod user;

pub use lifecycle::Lifecycle;
pub use partner::{
    Coordinates, DashboardData, DocumentStatus, Partner, PartnerDataset, PartnerDocument,
    PartnerLocation, PartnerService, PartnerType, PaymentMethod, PaymentMethods, PriceUnit,
    ProjectStats, SocialLinks,
};
pub use user::{NotificationPreferences, PhoneNumber, User, UserDataset, UserRef, UserRoster, UserType};
