//! Time-series and portfolio views derived from filing histories.

use rayon::prelude::*;
use serde::Serialize;

use crate::filing::{Assessment, ModuleShare, SolvencyFiling, assess, module_shares};
use crate::roles::Role;
use crate::types::{CompanyId, ReportingPeriod};

/// Trailing window shown to limited-visibility roles, in periods.
pub const LIMITED_HISTORY_PERIODS: usize = 12;

/// Per-module time series for charting. Only built for roles that see
/// module detail.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModuleSeries {
    pub market: Vec<f64>,
    pub credit: Vec<f64>,
    pub life: Vec<f64>,
    pub non_life: Vec<f64>,
}

/// Chart-ready indicator history for one company, shaped by the viewing
/// role: clients lose module detail, clients and consultants are capped
/// to the trailing twelve periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub periods: Vec<ReportingPeriod>,
    pub ratios: Vec<f64>,
    pub scr_totals: Vec<f64>,
    pub own_funds: Vec<f64>,
    pub modules: Option<ModuleSeries>,
}

pub fn indicator_series(filings: &[SolvencyFiling], role: Role) -> IndicatorSeries {
    let mut ordered: Vec<&SolvencyFiling> = filings.iter().collect();
    ordered.sort_by_key(|f| f.period);
    if role.history_is_limited() && ordered.len() > LIMITED_HISTORY_PERIODS {
        ordered.drain(..ordered.len() - LIMITED_HISTORY_PERIODS);
    }

    let mut series = IndicatorSeries {
        periods: Vec::with_capacity(ordered.len()),
        ratios: Vec::with_capacity(ordered.len()),
        scr_totals: Vec::with_capacity(ordered.len()),
        own_funds: Vec::with_capacity(ordered.len()),
        modules: role.sees_module_detail().then(ModuleSeries::default),
    };

    for filing in ordered {
        let modules = filing.effective_modules();
        let assessment = assess(filing);
        series.periods.push(filing.period);
        series.ratios.push(assessment.ratio);
        series.scr_totals.push(assessment.scr);
        series.own_funds.push(filing.balance.own_funds);
        if let Some(m) = &mut series.modules {
            m.market.push(modules.market);
            m.credit.push(modules.credit);
            m.life.push(modules.life);
            m.non_life.push(modules.non_life);
        }
    }

    series
}

/// Module repartition of the most recent filing. `None` for roles
/// without module visibility or when there is no history.
pub fn latest_repartition(filings: &[SolvencyFiling], role: Role) -> Option<Vec<ModuleShare>> {
    if !role.sees_module_detail() {
        return None;
    }
    let latest = filings.iter().max_by_key(|f| f.period)?;
    Some(module_shares(&latest.effective_modules()))
}

/// One assessed filing in a portfolio run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub company_id: CompanyId,
    pub period: ReportingPeriod,
    pub assessment: Assessment,
}

/// Assess every filing in parallel. Each filing is independent, so the
/// work splits trivially across the rayon pool; output order follows
/// input order.
pub fn assess_portfolio(filings: &[SolvencyFiling]) -> Vec<PortfolioEntry> {
    filings
        .par_iter()
        .map(|f| PortfolioEntry {
            company_id: f.company_id,
            period: f.period,
            assessment: assess(f),
        })
        .collect()
}
