//! Report assembly and export. Rendering to PDF is a downstream concern;
//! this module produces the document content and its text/CSV/JSON forms.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::capital::SolvencyStatus;
use crate::company::Company;
use crate::filing::{Assessment, ModuleShare, SolvencyFiling, module_shares};
use crate::roles::Role;
use crate::types::ReportingPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Summary,
    Detailed,
    Technical,
    RiskAnalysis,
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Summary => "RAPPORT DE SOLVABILITÉ - SYNTHÈSE",
            ReportKind::Detailed => "RAPPORT DE SOLVABILITÉ - DÉTAILLÉ",
            ReportKind::Technical => "RAPPORT TECHNIQUE ACTUARIEL",
            ReportKind::RiskAnalysis => "RAPPORT D'ANALYSE DES RISQUES",
        }
    }

    /// Parse the CLI report token.
    pub fn parse(s: &str) -> Option<ReportKind> {
        match s {
            "summary" => Some(ReportKind::Summary),
            "detailed" => Some(ReportKind::Detailed),
            "technical" => Some(ReportKind::Technical),
            "risk_analysis" => Some(ReportKind::RiskAnalysis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub label: &'static str,
    pub value: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvencyReport {
    pub kind: ReportKind,
    pub company: String,
    pub siren: String,
    pub company_kind: &'static str,
    pub period: ReportingPeriod,
    pub generated_by: &'static str,
    pub generated_on: String,
    pub assessment: Assessment,
    pub indicators: Vec<IndicatorRow>,
    pub repartition: Vec<ModuleShare>,
    pub analysis: &'static str,
    /// Balance-sheet complement, only populated for the detailed kind.
    pub complementary: Vec<(&'static str, String)>,
}

/// Band commentary carried into every report.
pub fn recommendation(status: SolvencyStatus) -> &'static str {
    match status {
        SolvencyStatus::VeryStrong => {
            "Solvency position is excellent, well above regulatory requirements. \
             Maintain the current strategy; capital optimisation is an option."
        }
        SolvencyStatus::Strong => {
            "Position is compliant with a comfortable safety margin. \
             Keep monitoring and reinforce management of the main risks."
        }
        SolvencyStatus::Compliant => {
            "Position requires reinforced monitoring: the ratio sits close to \
             the required minimum. Prepare an improvement plan and review the \
             risk strategy."
        }
        SolvencyStatus::Watch | SolvencyStatus::NonCompliant => {
            "Critical position requiring immediate intervention. An urgent \
             recovery plan and a capital increase are needed."
        }
    }
}

fn money(v: f64) -> String {
    format!("{v:.2}")
}

/// Assemble the report for one assessed filing. `generated_on` is a
/// caller-supplied date string so the document stays reproducible.
pub fn build_report(
    kind: ReportKind,
    company: &Company,
    filing: &SolvencyFiling,
    assessment: &Assessment,
    generated_by: Role,
    generated_on: &str,
) -> SolvencyReport {
    let margin = filing.balance.own_funds - assessment.scr;
    let indicators = vec![
        IndicatorRow {
            label: "Solvency ratio",
            value: format!("{:.1}%", assessment.ratio),
            note: assessment.status.label().to_string(),
        },
        IndicatorRow {
            label: "SCR",
            value: money(assessment.scr),
            note: "required capital".to_string(),
        },
        IndicatorRow {
            label: "MCR",
            value: money(assessment.mcr),
            note: "regulatory minimum".to_string(),
        },
        IndicatorRow {
            label: "Own funds",
            value: money(filing.balance.own_funds),
            note: "available capital".to_string(),
        },
        IndicatorRow {
            label: "Solvency margin",
            value: money(margin),
            note: if margin >= 0.0 { "surplus" } else { "deficit" }.to_string(),
        },
    ];

    let complementary = if kind == ReportKind::Detailed {
        vec![
            ("Annual premium", money(filing.balance.annual_premium)),
            ("Technical provisions", money(filing.balance.technical_provisions)),
            ("Investments", money(filing.balance.investments)),
            ("Fixed assets", money(filing.balance.fixed_assets)),
            ("Claims incurred", money(filing.balance.claims_incurred)),
        ]
    } else {
        Vec::new()
    };

    SolvencyReport {
        kind,
        company: company.name.clone(),
        siren: company.siren.clone(),
        company_kind: company.kind.label(),
        period: filing.period,
        generated_by: generated_by.label(),
        generated_on: generated_on.to_string(),
        assessment: *assessment,
        indicators,
        repartition: module_shares(&filing.effective_modules()),
        analysis: recommendation(assessment.status),
        complementary,
    }
}

impl SolvencyReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", self.kind.title());
        let _ = writeln!(out, "Company: {} (SIREN {})", self.company, self.siren);
        let _ = writeln!(out, "Type: {}", self.company_kind);
        let _ = writeln!(out, "Period: {}", self.period);
        let _ = writeln!(out, "Generated by: {} on {}", self.generated_by, self.generated_on);
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<18} | {:>14} | {}", "Indicator", "Value", "Note");
        let _ = writeln!(out, "{}", "-".repeat(54));
        for row in &self.indicators {
            let _ = writeln!(out, "{:<18} | {:>14} | {}", row.label, row.value, row.note);
        }
        if !self.repartition.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{:<12} | {:>14} | {:>7}", "Module", "Amount", "Share");
            let _ = writeln!(out, "{}", "-".repeat(39));
            for share in &self.repartition {
                let _ = writeln!(
                    out,
                    "{:<12} | {:>14.2} | {:>6.1}%",
                    share.module, share.amount, share.share_pct
                );
            }
        }
        if !self.complementary.is_empty() {
            let _ = writeln!(out);
            for (label, value) in &self.complementary {
                let _ = writeln!(out, "{label:<22} {value:>14}");
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Analysis: {}", self.analysis);
        out
    }

    /// Flat CSV export: one `section,label,value` row per datum.
    pub fn write_csv<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "section,label,value")?;
        writeln!(w, "header,company,{}", self.company)?;
        writeln!(w, "header,siren,{}", self.siren)?;
        writeln!(w, "header,period,{}", self.period)?;
        writeln!(w, "header,status,{}", self.assessment.status.label())?;
        writeln!(w, "header,severity,{}", self.assessment.status.severity())?;
        for row in &self.indicators {
            writeln!(w, "indicator,{},{}", row.label, row.value)?;
        }
        for share in &self.repartition {
            writeln!(w, "module,{},{:.2}", share.module, share.amount)?;
            writeln!(w, "module_share,{},{:.1}", share.module, share.share_pct)?;
        }
        for (label, value) in &self.complementary {
            writeln!(w, "complementary,{label},{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capital::RiskModules;
    use crate::company::{CompanyKind, RegulatoryStatus};
    use crate::filing::{BalanceSheet, assess};
    use crate::types::CompanyId;

    fn company() -> Company {
        Company {
            id: CompanyId(3),
            name: "Prévoyance du Nord".to_string(),
            siren: "987654321".to_string(),
            kind: CompanyKind::Composite,
            regulatory_status: RegulatoryStatus::Authorised,
            country: "France".to_string(),
            group: None,
            active: true,
        }
    }

    fn filing() -> SolvencyFiling {
        SolvencyFiling {
            company_id: CompanyId(3),
            period: ReportingPeriod::new(2025, 9),
            balance: BalanceSheet {
                own_funds: 50.0,
                technical_provisions: 80.0,
                annual_premium: 40.0,
                investments: 110.0,
                fixed_assets: 25.0,
                claims_incurred: 20.0,
            },
            modules: RiskModules::new(10.0, 5.0, 8.0, 12.0, 2.0),
            breakdown: None,
        }
    }

    fn report(kind: ReportKind) -> SolvencyReport {
        let f = filing();
        let a = assess(&f);
        build_report(kind, &company(), &f, &a, Role::Actuary, "2025-10-01")
    }

    #[test]
    fn summary_report_carries_the_five_key_indicators() {
        let r = report(ReportKind::Summary);
        assert_eq!(r.indicators.len(), 5);
        assert!(r.complementary.is_empty());
        assert_eq!(r.repartition.len(), 5);
    }

    #[test]
    fn detailed_report_adds_the_balance_sheet_complement() {
        let r = report(ReportKind::Detailed);
        assert_eq!(r.complementary.len(), 5);
        assert!(r.complementary.iter().any(|(l, _)| *l == "Annual premium"));
    }

    #[test]
    fn margin_row_flags_a_deficit() {
        let mut f = filing();
        f.balance.own_funds = 10.0;
        let a = assess(&f);
        let r = build_report(ReportKind::Summary, &company(), &f, &a, Role::Admin, "2025-10-01");
        let margin = r.indicators.iter().find(|row| row.label == "Solvency margin").unwrap();
        assert_eq!(margin.note, "deficit");
    }

    #[test]
    fn analysis_text_follows_the_status_band() {
        assert!(recommendation(SolvencyStatus::VeryStrong).contains("excellent"));
        assert!(recommendation(SolvencyStatus::NonCompliant).contains("recovery plan"));
        assert_eq!(
            recommendation(SolvencyStatus::Watch),
            recommendation(SolvencyStatus::NonCompliant),
        );
    }

    #[test]
    fn text_rendering_includes_title_and_status() {
        let r = report(ReportKind::Technical);
        let text = r.render_text();
        assert!(text.contains("RAPPORT TECHNIQUE ACTUARIEL"));
        assert!(text.contains("Prévoyance du Nord"));
        assert!(text.contains(r.assessment.status.label()));
    }

    #[test]
    fn csv_export_has_one_row_per_datum() {
        let r = report(ReportKind::Detailed);
        let mut buf: Vec<u8> = Vec::new();
        r.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // header row + 5 header fields + 5 indicators + 2×5 module rows + 5 complementary
        assert_eq!(lines.len(), 1 + 5 + 5 + 10 + 5);
        assert_eq!(lines[0], "section,label,value");
        assert!(lines.iter().any(|l| l.starts_with("module_share,market,")));
    }

    #[test]
    fn report_serializes_to_json() {
        let r = report(ReportKind::Summary);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["company"], "Prévoyance du Nord");
        assert!(v["assessment"]["scr"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn report_kind_tokens_parse() {
        assert_eq!(ReportKind::parse("summary"), Some(ReportKind::Summary));
        assert_eq!(ReportKind::parse("risk_analysis"), Some(ReportKind::RiskAnalysis));
        assert_eq!(ReportKind::parse("pdf"), None);
    }
}
