//! Sub-risk detail behind each correlated module. Filed as a typed nested
//! record so the stored shape cannot drift from what the rollup expects.

use serde::{Deserialize, Serialize};

use crate::capital::RiskModules;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketRisk {
    pub interest_rate: f64,
    pub equity: f64,
    pub property: f64,
}

impl MarketRisk {
    pub fn total(&self) -> f64 {
        self.interest_rate + self.equity + self.property
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditRisk {
    pub counterparty: f64,
    pub spread: f64,
    pub concentration: f64,
}

impl CreditRisk {
    pub fn total(&self) -> f64 {
        self.counterparty + self.spread + self.concentration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LifeRisk {
    pub mortality: f64,
    pub longevity: f64,
    pub lapse: f64,
}

impl LifeRisk {
    pub fn total(&self) -> f64 {
        self.mortality + self.longevity + self.lapse
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NonLifeRisk {
    pub premium: f64,
    pub reserve: f64,
    pub catastrophe: f64,
}

impl NonLifeRisk {
    pub fn total(&self) -> f64 {
        self.premium + self.reserve + self.catastrophe
    }
}

/// Full sub-risk breakdown for an advanced filing. Module charges are
/// derived from it by summing each module's sub-risks; the operational
/// charge has no sub-risk detail and is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub market: MarketRisk,
    pub credit: CreditRisk,
    pub life: LifeRisk,
    pub non_life: NonLifeRisk,
}

impl RiskBreakdown {
    pub fn modules(&self, operational: f64) -> RiskModules {
        RiskModules::new(
            self.market.total(),
            self.credit.total(),
            self.life.total(),
            self.non_life.total(),
            operational,
        )
    }
}
