//! Hosting plans offered on the pricing page.
//!
//! The catalog is static data: it is built once on first use and shared
//! read-only for the rest of the process.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use crate::error::OrderError;

/// Identifier of a hosting tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    Premium,
    Pro,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Basic, PlanId::Premium, PlanId::Pro];

    /// Parse a plan identifier as used by the order buttons (`basic`, `premium`, `pro`).
    ///
    /// ```
    /// use ptero::catalog::PlanId;
    ///
    /// assert_eq!(PlanId::parse("premium"), Some(PlanId::Premium));
    /// assert_eq!(PlanId::parse(" PRO "), Some(PlanId::Pro));
    /// assert_eq!(PlanId::parse("enterprise"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "basic" => Some(PlanId::Basic),
            "premium" => Some(PlanId::Premium),
            "pro" => Some(PlanId::Pro),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Premium => "premium",
            PlanId::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    /// Price as displayed, with `.` as thousands separator (`10.000`).
    pub price: String,
    pub currency: String,
    pub period: String,
    pub features: Vec<String>,
}

impl Plan {
    /// `Rp 10.000/bulan`
    pub fn price_label(&self) -> String {
        format!("{} {}{}", self.currency, self.price, self.period)
    }

    /// `Premium Plan - Rp 10.000/bulan`, shown in the order dialog.
    pub fn display_summary(&self) -> String {
        format!("{} - {}", self.name, self.price_label())
    }
}

fn plan(id: PlanId, name: &str, price: &str, features: &[&str]) -> Plan {
    Plan {
        id,
        name: name.to_string(),
        price: price.to_string(),
        currency: "Rp".to_string(),
        period: "/bulan".to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    plans: vec![
        plan(
            PlanId::Basic,
            "Basic Plan",
            "1.000",
            &["1GB RAM", "100% CPU", "Unlimited Bandwidth", "DDoS Protection", "24/7 Support"],
        ),
        plan(
            PlanId::Premium,
            "Premium Plan",
            "10.000",
            &[
                "6GB RAM",
                "500% CPU",
                "Unlimited Bandwidth",
                "Advanced DDoS Protection",
                "Full 20 Days Guarantee",
                "Priority Support",
            ],
        ),
        plan(
            PlanId::Pro,
            "Pro Plan",
            "15.000",
            &[
                "Unlimited RAM",
                "Unlimited CPU",
                "Unlimited Bandwidth",
                "Enterprise DDoS Protection",
                "Full 20 Days Guarantee",
                "VIP Support",
            ],
        ),
    ],
});

#[derive(Debug)]
pub struct Catalog {
    plans: Vec<Plan>,
}

impl Catalog {
    /// The plans sold on the page.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Plans in display order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn get(&self, id: PlanId) -> &Plan {
        // plans are stored in PlanId declaration order
        &self.plans[id as usize]
    }

    pub fn lookup(&self, raw_id: &str) -> Result<&Plan, OrderError> {
        PlanId::parse(raw_id)
            .map(|id| self.get(id))
            .ok_or_else(|| OrderError::PlanNotFound(raw_id.to_string()))
    }
}

/// Game selector shown in the order form; purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Minecraft,
    Csgo,
    Rust,
    Ark,
    Gmod,
    Other,
}

impl GameType {
    pub const ALL: [GameType; 6] = [
        GameType::Minecraft,
        GameType::Csgo,
        GameType::Rust,
        GameType::Ark,
        GameType::Gmod,
        GameType::Other,
    ];

    /// `None` means "not selected"; unknown values are treated the same way.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "minecraft" => Some(GameType::Minecraft),
            "csgo" => Some(GameType::Csgo),
            "rust" => Some(GameType::Rust),
            "ark" => Some(GameType::Ark),
            "gmod" => Some(GameType::Gmod),
            "other" => Some(GameType::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Minecraft => "minecraft",
            GameType::Csgo => "csgo",
            GameType::Rust => "rust",
            GameType::Ark => "ark",
            GameType::Gmod => "gmod",
            GameType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameType::Minecraft => "Minecraft",
            GameType::Csgo => "CS:GO",
            GameType::Rust => "Rust",
            GameType::Ark => "ARK: Survival Evolved",
            GameType::Gmod => "Garry's Mod",
            GameType::Other => "Lainnya",
        }
    }
}
