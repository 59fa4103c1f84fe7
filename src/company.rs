use serde::{Deserialize, Serialize};

use crate::types::CompanyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyKind {
    Life,
    NonLife,
    Composite,
    Reinsurer,
    FinancialInstitution,
}

impl CompanyKind {
    pub fn label(self) -> &'static str {
        match self {
            CompanyKind::Life => "Assurance Vie",
            CompanyKind::NonLife => "Assurance Non-Vie",
            CompanyKind::Composite => "Assurance Mixte",
            CompanyKind::Reinsurer => "Réassureur",
            CompanyKind::FinancialInstitution => "Institution Financière",
        }
    }
}

/// Standing with the supervisor, distinct from the computed solvency band:
/// a company can file a strong ratio while under enhanced supervision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegulatoryStatus {
    Authorised,
    EnhancedSupervision,
    Suspended,
    LicenceWithdrawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// 9-digit registration number.
    pub siren: String,
    pub kind: CompanyKind,
    pub regulatory_status: RegulatoryStatus,
    pub country: String,
    pub group: Option<String>,
    pub active: bool,
}

impl Company {
    pub fn siren_is_valid(&self) -> bool {
        self.siren.len() == 9 && self.siren.bytes().all(|b| b.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(siren: &str) -> Company {
        Company {
            id: CompanyId(1),
            name: "AssurVie Atlantique".to_string(),
            siren: siren.to_string(),
            kind: CompanyKind::Life,
            regulatory_status: RegulatoryStatus::Authorised,
            country: "France".to_string(),
            group: None,
            active: true,
        }
    }

    #[test]
    fn nine_digit_siren_is_valid() {
        assert!(company("552100554").siren_is_valid());
    }

    #[test]
    fn short_or_alphabetic_siren_is_rejected() {
        assert!(!company("55210055").siren_is_valid());
        assert!(!company("55210055X").siren_is_valid());
        assert!(!company("5521005540").siren_is_valid());
    }

    #[test]
    fn kind_labels_are_the_filed_display_strings() {
        assert_eq!(CompanyKind::Composite.label(), "Assurance Mixte");
        assert_eq!(CompanyKind::Reinsurer.label(), "Réassureur");
    }
}
