//! 数据集审计
//!
//! 检查已生成的用户和合作方数据集是否满足记录不变式和引用完整性。
//! 用户名与 UUID 的唯一性不在检查范围内。

use std::collections::HashMap;
use std::fmt;

use crate::models::{Partner, User, UserType};

/// 单条违规
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// 时间戳顺序错误
    UnorderedTimestamps { record: String },
    /// 合作方引用了不存在的用户
    UnknownUser { user_id: String },
    /// 合作方引用了非 partner 角色的用户
    NotAPartner { user_id: String, user_type: UserType },
    /// 文件状态与驳回原因不一致
    InconsistentDocument { user_id: String, index: usize },
    /// 首选支付方式与支付方式集合不一致
    InconsistentPayment { user_id: String },
    /// 项目统计不一致
    InconsistentProjectStats { user_id: String },
    /// 合作方数量与 partner 用户数量不符
    PartnerCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnorderedTimestamps { record } => write!(f, "{}: 时间戳顺序错误", record),
            Self::UnknownUser { user_id } => write!(f, "partner {}: 用户不存在", user_id),
            Self::NotAPartner { user_id, user_type } => {
                write!(f, "partner {}: 用户角色为 {}", user_id, user_type.as_str())
            }
            Self::InconsistentDocument { user_id, index } => {
                write!(f, "partner {}: 第 {} 份文件驳回原因不一致", user_id, index)
            }
            Self::InconsistentPayment { user_id } => {
                write!(f, "partner {}: 首选支付方式不一致", user_id)
            }
            Self::InconsistentProjectStats { user_id } => {
                write!(f, "partner {}: 项目统计不一致", user_id)
            }
            Self::PartnerCountMismatch { expected, actual } => {
                write!(f, "合作方数量 {} 与 partner 用户数量 {} 不符", actual, expected)
            }
        }
    }
}

/// 审计报告
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub users_checked: usize,
    pub partners_checked: usize,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// 审计两个数据集
pub fn audit(users: &[User], partners: &[Partner]) -> AuditReport {
    let mut violations = Vec::new();

    for user in users {
        if !user.lifecycle.is_ordered() {
            violations.push(Violation::UnorderedTimestamps {
                record: format!("user {}", user.id),
            });
        }
    }

    let roles: HashMap<String, UserType> = users
        .iter()
        .map(|user| (user.id.to_string(), user.user_type))
        .collect();

    for partner in partners {
        violations.extend(audit_partner(partner, &roles));
    }

    let expected = users
        .iter()
        .filter(|user| user.user_type == UserType::Partner)
        .count();
    if expected != partners.len() {
        violations.push(Violation::PartnerCountMismatch {
            expected,
            actual: partners.len(),
        });
    }

    AuditReport {
        users_checked: users.len(),
        partners_checked: partners.len(),
        violations,
    }
}

fn audit_partner(partner: &Partner, roles: &HashMap<String, UserType>) -> Vec<Violation> {
    let user_id = &partner.user_id;
    let mut violations = Vec::new();

    match roles.get(user_id) {
        None => violations.push(Violation::UnknownUser {
            user_id: user_id.clone(),
        }),
        Some(&user_type) if user_type != UserType::Partner => {
            violations.push(Violation::NotAPartner {
                user_id: user_id.clone(),
                user_type,
            })
        }
        Some(_) => {}
    }

    if !partner.lifecycle.is_ordered() {
        violations.push(Violation::UnorderedTimestamps {
            record: format!("partner {}", user_id),
        });
    }

    violations.extend(
        partner
            .documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| !doc.is_consistent())
            .map(|(index, _)| Violation::InconsistentDocument {
                user_id: user_id.clone(),
                index,
            }),
    );

    if !partner.payment_methods.is_consistent() {
        violations.push(Violation::InconsistentPayment {
            user_id: user_id.clone(),
        });
    }

    if !partner.project_stats.is_consistent() {
        violations.push(Violation::InconsistentProjectStats {
            user_id: user_id.clone(),
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{
        GeneratorConfig, PartnerGenerator, Timeline, UserGenerator, seeded_rng,
    };
    use crate::models::{DocumentStatus, UserRoster};
    use chrono::Duration;

    fn generate(seed: u64, count: usize) -> (Vec<User>, Vec<Partner>) {
        let config = GeneratorConfig {
            bcrypt_cost: 4,
            ..Default::default()
        };
        let timeline = Timeline::starting_now(730);
        let mut rng = seeded_rng(Some(seed));

        let users = UserGenerator::new(&config, timeline)
            .unwrap()
            .generate_users(&mut rng, count)
            .unwrap();
        let roster = UserRoster::from(&users_dataset(&users));
        let partners = PartnerGenerator::new(timeline).generate_for_roster(&mut rng, &roster);
        (users, partners)
    }

    fn users_dataset(users: &[User]) -> crate::models::UserDataset {
        crate::models::UserDataset {
            users: users.to_vec(),
        }
    }

    #[test]
    fn test_generated_data_is_clean() {
        let (users, partners) = generate(10, 80);
        let report = audit(&users, &partners);
        assert_eq!(report.users_checked, 80);
        assert!(report.is_clean(), "{:?}", report.violations);
    }

    #[test]
    fn test_detects_non_partner_reference() {
        let (users, mut partners) = generate(11, 80);
        let client = users
            .iter()
            .find(|u| u.user_type == UserType::Client)
            .unwrap();
        partners[0].user_id = client.id.to_string();

        let report = audit(&users, &partners);
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::NotAPartner {
                user_type: UserType::Client,
                ..
            }
        )));
    }

    #[test]
    fn test_detects_unknown_user_and_count_mismatch() {
        let (users, mut partners) = generate(12, 80);
        let mut extra = partners[0].clone();
        extra.user_id = "ghost".to_string();
        partners.push(extra);

        let report = audit(&users, &partners);
        assert!(report.violations.contains(&Violation::UnknownUser {
            user_id: "ghost".to_string()
        }));
        assert!(
            report
                .violations
                .iter()
                .any(|v| matches!(v, Violation::PartnerCountMismatch { .. }))
        );
    }

    #[test]
    fn test_detects_broken_records() {
        let (users, mut partners) = generate(13, 80);
        let partner = &mut partners[0];
        partner.documents[0].status = DocumentStatus::Rejected;
        partner.documents[0].rejection_reason = None;
        partner.payment_methods.methods.clear();
        partner.payment_methods.preferred = Some(crate::models::PaymentMethod::Cash);
        partner.project_stats.completed = partner.project_stats.total + 1;
        partner.lifecycle.updated_at = partner.lifecycle.created_at - Duration::days(1);

        let report = audit(&users, &partners);
        assert_eq!(report.violations.len(), 4, "{:?}", report.violations);
        for violation in &report.violations {
            assert!(!violation.to_string().is_empty());
        }
    }
}
