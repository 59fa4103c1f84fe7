use std::fmt;

use serde::{Deserialize, Serialize};

/// Correlation between the four correlated risk modules, fixed by the
/// Solvency II standard formula. Row/column order: market, credit, life,
/// non-life. Operational risk sits outside the matrix — it is added
/// linearly after aggregation, with no diversification benefit.
pub const MODULE_CORRELATION: [[f64; 4]; 4] = [
    [1.00, 0.25, 0.25, 0.50],
    [0.25, 1.00, 0.25, 0.25],
    [0.25, 0.25, 1.00, 0.25],
    [0.50, 0.25, 0.25, 1.00],
];

/// MCR corridor: the minimum capital requirement is clamped to this
/// fraction band of the SCR whatever the premium/provision figures say.
pub const MCR_FLOOR_OF_SCR: f64 = 0.25;
pub const MCR_CAP_OF_SCR: f64 = 0.45;

/// Capital charge per risk module, in monetary units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskModules {
    pub market: f64,
    pub credit: f64,
    pub life: f64,
    pub non_life: f64,
    pub operational: f64,
}

impl RiskModules {
    /// Negative amounts are clamped to zero: module charges are capital
    /// amounts and the standard formula is only defined on non-negative
    /// inputs.
    pub fn new(market: f64, credit: f64, life: f64, non_life: f64, operational: f64) -> Self {
        RiskModules {
            market: market.max(0.0),
            credit: credit.max(0.0),
            life: life.max(0.0),
            non_life: non_life.max(0.0),
            operational: operational.max(0.0),
        }
    }

    fn correlated(&self) -> [f64; 4] {
        [
            self.market.max(0.0),
            self.credit.max(0.0),
            self.life.max(0.0),
            self.non_life.max(0.0),
        ]
    }

    /// Basic SCR: square-root aggregation of the four correlated modules.
    /// With the unit diagonal this is sqrt(Σ mᵢ² + 2 Σ corrᵢⱼ mᵢ mⱼ).
    pub fn basic_scr(&self) -> f64 {
        let m = self.correlated();
        let mut sum = 0.0;
        for (i, row) in MODULE_CORRELATION.iter().enumerate() {
            for (j, corr) in row.iter().enumerate() {
                sum += corr * m[i] * m[j];
            }
        }
        sum.sqrt()
    }

    /// Total SCR: basic SCR plus the operational charge, added linearly.
    /// Always at least as large as any single module input.
    pub fn scr(&self) -> f64 {
        self.basic_scr() + self.operational.max(0.0)
    }
}

/// Minimum Capital Requirement: the larger of the premium-based (25 % of
/// annual written premium) and provision-based (15 % of technical
/// provisions) floors, clamped to the [25 %, 45 %] corridor of the SCR.
/// The cap at 45 % is applied before the floor at 25 % — with a degenerate
/// SCR the floor wins, which is the regulatory reading.
pub fn mcr(scr: f64, annual_premium: f64, technical_provisions: f64) -> f64 {
    let scr = scr.max(0.0);
    let premium_based = annual_premium.max(0.0) * 0.25;
    let provision_based = technical_provisions.max(0.0) * 0.15;
    let linear = premium_based.max(provision_based);
    (MCR_FLOOR_OF_SCR * scr).max(linear.min(MCR_CAP_OF_SCR * scr))
}

/// Eligible own funds over SCR, in percent. Defined as zero when the SCR
/// is zero so an empty filing never divides by zero.
pub fn solvency_ratio(own_funds: f64, scr: f64) -> f64 {
    if scr > 0.0 { own_funds.max(0.0) / scr * 100.0 } else { 0.0 }
}

/// Solvency position band. Band lower bounds are inclusive: a ratio of
/// exactly 150.0 is `Strong`, not `Compliant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolvencyStatus {
    /// Ratio ≥ 180 %.
    VeryStrong,
    /// Ratio ≥ 150 %.
    Strong,
    /// Ratio ≥ 120 %.
    Compliant,
    /// Ratio ≥ 100 %.
    Watch,
    /// Ratio < 100 %: own funds below the capital requirement.
    NonCompliant,
}

impl SolvencyStatus {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 180.0 {
            SolvencyStatus::VeryStrong
        } else if ratio >= 150.0 {
            SolvencyStatus::Strong
        } else if ratio >= 120.0 {
            SolvencyStatus::Compliant
        } else if ratio >= 100.0 {
            SolvencyStatus::Watch
        } else {
            SolvencyStatus::NonCompliant
        }
    }

    /// Display label as filed with the French supervisor.
    pub fn label(self) -> &'static str {
        match self {
            SolvencyStatus::VeryStrong => "Très Solide",
            SolvencyStatus::Strong => "Solide",
            SolvencyStatus::Compliant => "Conforme",
            SolvencyStatus::Watch => "Surveillance",
            SolvencyStatus::NonCompliant => "Non Conforme",
        }
    }

    /// Severity class consumed by report styling.
    pub fn severity(self) -> &'static str {
        match self {
            SolvencyStatus::VeryStrong => "success",
            SolvencyStatus::Strong => "info",
            SolvencyStatus::Compliant => "primary",
            SolvencyStatus::Watch => "warning",
            SolvencyStatus::NonCompliant => "danger",
        }
    }
}

impl fmt::Display for SolvencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
