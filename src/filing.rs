use serde::{Deserialize, Serialize};

use crate::capital::{self, RiskModules, SolvencyStatus};
use crate::company::Company;
use crate::risk::RiskBreakdown;
use crate::types::{CompanyId, ReportingPeriod};

/// Balance-sheet amounts entered with a filing, in monetary units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub own_funds: f64,
    pub technical_provisions: f64,
    pub annual_premium: f64,
    pub investments: f64,
    pub fixed_assets: f64,
    pub claims_incurred: f64,
}

impl BalanceSheet {
    pub fn total_assets(&self) -> f64 {
        self.investments + self.fixed_assets
    }

    pub fn total_liabilities(&self) -> f64 {
        self.own_funds + self.technical_provisions
    }

    /// Positive when the asset side exceeds own funds plus provisions.
    pub fn balance_gap(&self) -> f64 {
        self.total_assets() - self.total_liabilities()
    }
}

/// One submitted solvency data point for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvencyFiling {
    pub company_id: CompanyId,
    pub period: ReportingPeriod,
    pub balance: BalanceSheet,
    pub modules: RiskModules,
    /// Present when the filing entered sub-risk detail (the advanced
    /// path); module charges are then derived from it, not from
    /// `modules`, except for the operational charge which has no
    /// sub-risk split.
    pub breakdown: Option<RiskBreakdown>,
}

impl SolvencyFiling {
    /// Module charges the calculation runs on: rolled up from the
    /// breakdown when one was filed, otherwise as entered.
    pub fn effective_modules(&self) -> RiskModules {
        match &self.breakdown {
            Some(b) => b.modules(self.modules.operational),
            None => self.modules,
        }
    }
}

/// A filing together with the company it belongs to — the unit exchanged
/// on NDJSON streams and read by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingDocument {
    pub company: Company,
    pub filing: SolvencyFiling,
}

/// Computed regulatory outcome for one filing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub scr: f64,
    pub mcr: f64,
    /// Own funds over SCR, percent. Zero when the SCR is zero.
    pub ratio: f64,
    pub status: SolvencyStatus,
}

pub fn assess(filing: &SolvencyFiling) -> Assessment {
    let modules = filing.effective_modules();
    let scr = modules.scr();
    let mcr = capital::mcr(scr, filing.balance.annual_premium, filing.balance.technical_provisions);
    let ratio = capital::solvency_ratio(filing.balance.own_funds, scr);
    Assessment { scr, mcr, ratio, status: SolvencyStatus::from_ratio(ratio) }
}

/// One module's weight in the filing, for repartition tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleShare {
    pub module: &'static str,
    pub amount: f64,
    /// Percent of the summed correlated modules. The operational row is
    /// expressed against the same denominator so the four correlated
    /// shares still total 100.
    pub share_pct: f64,
}

/// Per-module shares of the summed correlated charges. Empty when all
/// four correlated modules are zero. The operational row is appended
/// only when the charge is non-zero.
pub fn module_shares(modules: &RiskModules) -> Vec<ModuleShare> {
    let rows = [
        ("market", modules.market),
        ("credit", modules.credit),
        ("life", modules.life),
        ("non_life", modules.non_life),
    ];
    let denom: f64 = rows.iter().map(|(_, v)| v.max(0.0)).sum();
    if denom <= 0.0 {
        return Vec::new();
    }
    let mut shares: Vec<ModuleShare> = rows
        .iter()
        .map(|&(module, amount)| ModuleShare {
            module,
            amount,
            share_pct: amount.max(0.0) / denom * 100.0,
        })
        .collect();
    if modules.operational > 0.0 {
        shares.push(ModuleShare {
            module: "operational",
            amount: modules.operational,
            share_pct: modules.operational / denom * 100.0,
        });
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{CreditRisk, LifeRisk, MarketRisk, NonLifeRisk};

    fn filing() -> SolvencyFiling {
        SolvencyFiling {
            company_id: CompanyId(7),
            period: ReportingPeriod::new(2025, 6),
            balance: BalanceSheet {
                own_funds: 42.0,
                technical_provisions: 100.0,
                annual_premium: 60.0,
                investments: 120.0,
                fixed_assets: 30.0,
                claims_incurred: 45.0,
            },
            modules: RiskModules::new(10.0, 5.0, 8.0, 12.0, 2.0),
            breakdown: None,
        }
    }

    #[test]
    fn balance_sheet_totals_and_gap() {
        let b = filing().balance;
        assert_eq!(b.total_assets(), 150.0);
        assert_eq!(b.total_liabilities(), 142.0);
        assert_eq!(b.balance_gap(), 8.0);
    }

    #[test]
    fn assessment_ties_out_on_the_worked_scenario() {
        let a = assess(&filing());
        let scr = 616.0_f64.sqrt() + 2.0;
        assert!((a.scr - scr).abs() < 1e-9);
        // Both linear floors come to 15, above the 45 % cap of a ~26.8 SCR,
        // so the corridor clamp takes over.
        assert!((a.mcr - 0.45 * scr).abs() < 1e-9);
        let ratio = 42.0 / scr * 100.0;
        assert!((a.ratio - ratio).abs() < 1e-9);
        assert_eq!(a.status, SolvencyStatus::Strong);
    }

    #[test]
    fn breakdown_overrides_entered_module_amounts() {
        let mut f = filing();
        f.modules = RiskModules::new(999.0, 999.0, 999.0, 999.0, 2.0);
        f.breakdown = Some(RiskBreakdown {
            market: MarketRisk { interest_rate: 4.0, equity: 5.0, property: 1.0 },
            credit: CreditRisk { counterparty: 2.0, spread: 2.5, concentration: 0.5 },
            life: LifeRisk { mortality: 3.0, longevity: 4.0, lapse: 1.0 },
            non_life: NonLifeRisk { premium: 6.0, reserve: 4.0, catastrophe: 2.0 },
        });
        let m = f.effective_modules();
        assert_eq!(m.market, 10.0);
        assert_eq!(m.operational, 2.0, "operational passes through from the entered modules");
        let a = assess(&f);
        assert!((a.scr - (616.0_f64.sqrt() + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn module_shares_sum_to_one_hundred_over_correlated_modules() {
        let shares = module_shares(&RiskModules::new(10.0, 5.0, 8.0, 12.0, 2.0));
        assert_eq!(shares.len(), 5);
        let correlated_pct: f64 =
            shares.iter().filter(|s| s.module != "operational").map(|s| s.share_pct).sum();
        assert!((correlated_pct - 100.0).abs() < 1e-9);
        let op = shares.last().unwrap();
        assert_eq!(op.module, "operational");
        assert!((op.share_pct - 2.0 / 35.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn module_shares_empty_when_no_correlated_charge() {
        assert!(module_shares(&RiskModules::new(0.0, 0.0, 0.0, 0.0, 5.0)).is_empty());
    }

    #[test]
    fn filing_document_round_trips_through_json() {
        use crate::company::{Company, CompanyKind, RegulatoryStatus};
        let doc = FilingDocument {
            company: Company {
                id: CompanyId(7),
                name: "Mutuelle du Rhône".to_string(),
                siren: "123456789".to_string(),
                kind: CompanyKind::Composite,
                regulatory_status: RegulatoryStatus::Authorised,
                country: "France".to_string(),
                group: Some("Groupe Rhône".to_string()),
                active: true,
            },
            filing: filing(),
        };
        let line = serde_json::to_string(&doc).unwrap();
        let back: FilingDocument = serde_json::from_str(&line).unwrap();
        assert_eq!(back, doc);
    }
}
