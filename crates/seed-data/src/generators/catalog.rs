//! 固定词表
//!
//! 合作方生成使用的摄影业务词表和城市目录。

use crate::models::PaymentMethod;

/// 城市目录条目
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub state: &'static str,
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
pub const CITIES: [City; 10] = [
    City { name: "Mumbai", state: "Maharashtra", lat: 19.0760, lng: 72.8777 },
    City { name: "Delhi", state: "Delhi", lat: 28.7041, lng: 77.1025 },
    City { name: "Bangalore", state: "Karnataka", lat: 12.9716, lng: 77.5946 },
    City { name: "Hyderabad", state: "Telangana", lat: 17.3850, lng: 78.4867 },
    City { name: "Chennai", state: "Tamil Nadu", lat: 13.0827, lng: 80.2707 },
    City { name: "Kolkata", state: "West Bengal", lat: 22.5726, lng: 88.3639 },
    City { name: "Pune", state: "Maharashtra", lat: 18.5204, lng: 73.8567 },
    City { name: "Jaipur", state: "Rajasthan", lat: 26.9124, lng: 75.7873 },
    City { name: "Ahmedabad", state: "Gujarat", lat: 23.0225, lng: 72.5714 },
    City { name: "Lucknow", state: "Uttar Pradesh", lat: 26.8467, lng: 80.9462 },
];

pub const SPECIALIZATIONS: [&str; 12] = [
    "Wedding Photography",
    "Portrait Photography",
    "Commercial Photography",
    "Event Photography",
    "Fashion Photography",
    "Product Photography",
    "Real Estate Photography",
    "Food Photography",
    "Aerial Photography",
    "Sports Photography",
    "Documentary Photography",
    "Newborn Photography",
];

pub const DOCUMENT_TYPES: [&str; 4] = ["ID Proof", "Address Proof", "Portfolio", "Certification"];

pub const SERVICE_NAMES: [&str; 9] = [
    "Basic Photography",
    "Premium Photography",
    "Videography",
    "Photo Editing",
    "Drone Photography",
    "Cinematography",
    "Photo Booth",
    "Album Design",
    "Pre-Wedding Shoot",
];

pub const TOP_SERVICES: [&str; 3] = ["Wedding", "Portrait", "Commercial"];

/// 支付方式及其独立入选概率，按输出顺序排列
pub const PAYMENT_GATES: [(PaymentMethod, f64); 5] = [
    (PaymentMethod::CreditCard, 0.7),
    (PaymentMethod::DebitCard, 0.7),
    (PaymentMethod::Upi, 0.8),
    (PaymentMethod::BankTransfer, 0.5),
    (PaymentMethod::Cash, 0.3),
];
