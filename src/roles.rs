//! Enumerated roles mapped to fixed capability sets. Access checks match
//! on the enum, never on free-form role strings.

use serde::{Deserialize, Serialize};

use crate::report::ReportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Actuary,
    RiskManager,
    Controller,
    ChiefExecutive,
    Consultant,
    Regulator,
    Admin,
    Client,
    HumanResources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ComputeScr,
    ComputeAdvancedScr,
    ViewIndicators,
    ExportReports,
    ViewTechnicalReports,
    ViewRiskReports,
    ManageRisks,
    ViewComplianceReports,
    ViewStrategicReports,
    MakeDecisions,
    ViewPublicIndicators,
    ViewPublicReports,
    ConsultingAnalysis,
    Supervision,
    Audit,
    ManageUsers,
    ViewHrIndicators,
}

impl Role {
    /// Fixed capability set per role. Admin is handled in `can`, not
    /// listed exhaustively here.
    pub fn capabilities(self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Role::Actuary => &[
                ComputeScr,
                ComputeAdvancedScr,
                ViewIndicators,
                ExportReports,
                ViewTechnicalReports,
            ],
            Role::RiskManager => {
                &[ComputeScr, ViewIndicators, ExportReports, ViewRiskReports, ManageRisks]
            }
            Role::Controller => &[ViewIndicators, ExportReports, ViewComplianceReports],
            Role::ChiefExecutive => {
                &[ViewIndicators, ExportReports, ViewStrategicReports, MakeDecisions]
            }
            Role::Consultant => &[ViewIndicators, ExportReports, ConsultingAnalysis],
            Role::Regulator => &[ViewIndicators, ExportReports, Supervision, Audit],
            Role::Admin => &[],
            Role::Client => &[ViewPublicIndicators, ViewPublicReports],
            Role::HumanResources => &[ManageUsers, ViewHrIndicators],
        }
    }

    /// Admin holds every capability.
    pub fn can(self, capability: Capability) -> bool {
        self == Role::Admin || self.capabilities().contains(&capability)
    }

    /// Report-kind gating on top of the blanket export capability:
    /// technical reports are for actuaries, risk-analysis reports for
    /// risk managers and the executive.
    pub fn may_export(self, kind: ReportKind) -> bool {
        if !self.can(Capability::ExportReports) {
            return false;
        }
        match kind {
            ReportKind::Technical => matches!(self, Role::Actuary | Role::Admin),
            ReportKind::RiskAnalysis => {
                matches!(self, Role::RiskManager | Role::ChiefExecutive | Role::Admin)
            }
            ReportKind::Summary | ReportKind::Detailed => true,
        }
    }

    /// Roles that see per-module risk detail. Clients only get the
    /// headline ratio and status.
    pub fn sees_module_detail(self) -> bool {
        self != Role::Client
    }

    /// Roles whose indicator history is capped to the trailing year.
    pub fn history_is_limited(self) -> bool {
        matches!(self, Role::Client | Role::Consultant)
    }

    /// Parse the CLI role token (lowercase, underscores).
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "actuary" => Some(Role::Actuary),
            "risk_manager" => Some(Role::RiskManager),
            "controller" => Some(Role::Controller),
            "chief_executive" => Some(Role::ChiefExecutive),
            "consultant" => Some(Role::Consultant),
            "regulator" => Some(Role::Regulator),
            "admin" => Some(Role::Admin),
            "client" => Some(Role::Client),
            "human_resources" => Some(Role::HumanResources),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Actuary => "Actuaire",
            Role::RiskManager => "Risk Manager",
            Role::Controller => "Contrôleur de Gestion",
            Role::ChiefExecutive => "Directeur Général",
            Role::Consultant => "Consultant",
            Role::Regulator => "Régulateur",
            Role::Admin => "Administrateur",
            Role::Client => "Client",
            Role::HumanResources => "Responsable RH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actuary_computes_both_scr_paths() {
        assert!(Role::Actuary.can(Capability::ComputeScr));
        assert!(Role::Actuary.can(Capability::ComputeAdvancedScr));
    }

    #[test]
    fn risk_manager_computes_standard_but_not_advanced() {
        assert!(Role::RiskManager.can(Capability::ComputeScr));
        assert!(!Role::RiskManager.can(Capability::ComputeAdvancedScr));
    }

    #[test]
    fn admin_holds_every_capability() {
        use Capability::*;
        for cap in [
            ComputeScr,
            ComputeAdvancedScr,
            ViewIndicators,
            ExportReports,
            Supervision,
            ManageUsers,
        ] {
            assert!(Role::Admin.can(cap), "admin missing {cap:?}");
        }
    }

    #[test]
    fn client_has_only_public_access() {
        assert!(Role::Client.can(Capability::ViewPublicIndicators));
        assert!(!Role::Client.can(Capability::ViewIndicators));
        assert!(!Role::Client.can(Capability::ExportReports));
        assert!(!Role::Client.sees_module_detail());
    }

    #[test]
    fn technical_report_export_is_actuary_only() {
        assert!(Role::Actuary.may_export(ReportKind::Technical));
        assert!(Role::Admin.may_export(ReportKind::Technical));
        assert!(!Role::RiskManager.may_export(ReportKind::Technical));
        assert!(!Role::Controller.may_export(ReportKind::Technical));
    }

    #[test]
    fn risk_analysis_export_includes_the_executive() {
        assert!(Role::RiskManager.may_export(ReportKind::RiskAnalysis));
        assert!(Role::ChiefExecutive.may_export(ReportKind::RiskAnalysis));
        assert!(!Role::Actuary.may_export(ReportKind::RiskAnalysis));
    }

    #[test]
    fn summary_export_requires_the_export_capability() {
        assert!(Role::Controller.may_export(ReportKind::Summary));
        assert!(!Role::Client.may_export(ReportKind::Summary));
        assert!(!Role::HumanResources.may_export(ReportKind::Summary));
    }

    #[test]
    fn history_window_is_limited_for_client_and_consultant() {
        assert!(Role::Client.history_is_limited());
        assert!(Role::Consultant.history_is_limited());
        assert!(!Role::Regulator.history_is_limited());
    }

    #[test]
    fn role_tokens_parse_round_trip() {
        for (token, role) in [
            ("actuary", Role::Actuary),
            ("risk_manager", Role::RiskManager),
            ("chief_executive", Role::ChiefExecutive),
            ("human_resources", Role::HumanResources),
        ] {
            assert_eq!(Role::parse(token), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }
}
