//! Generate a seeded sample portfolio of companies and filings as NDJSON
//! on stdout, with a status summary on stderr.
//!
//! Usage: seed_portfolio [companies] [periods] [seed]

use std::collections::HashMap;
use std::env;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, LogNormal};

use solva::capital::RiskModules;
use solva::company::{Company, CompanyKind, RegulatoryStatus};
use solva::filing::{BalanceSheet, FilingDocument, SolvencyFiling, assess};
use solva::types::{CompanyId, ReportingPeriod};

const NAMES: &[&str] = &[
    "AssurVie Atlantique",
    "Prévoyance du Nord",
    "Mutuelle du Rhône",
    "Garantie Provençale",
    "Caisse Alpine d'Assurance",
    "Union Vie et Patrimoine",
    "Réassurance Continentale",
    "Assurances de la Loire",
    "Protection Méridionale",
    "Compagnie Armoricaine",
    "SécuriVie Occitane",
    "Fiduciaire des Flandres",
];

const KINDS: &[CompanyKind] = &[
    CompanyKind::Life,
    CompanyKind::NonLife,
    CompanyKind::Composite,
    CompanyKind::Reinsurer,
    CompanyKind::FinancialInstitution,
];

fn company(id: u64, rng: &mut ChaCha20Rng) -> Company {
    let name = if (id as usize) <= NAMES.len() {
        NAMES[(id - 1) as usize].to_string()
    } else {
        format!("{} {}", NAMES[(id as usize - 1) % NAMES.len()], id)
    };
    let kind = KINDS[rng.random_range(0..KINDS.len())];
    // Roughly one company in eight is under enhanced supervision.
    let regulatory_status = if rng.random_range(0..8) == 0 {
        RegulatoryStatus::EnhancedSupervision
    } else {
        RegulatoryStatus::Authorised
    };
    Company {
        id: CompanyId(id),
        name,
        siren: format!("{}", rng.random_range(100_000_000u64..1_000_000_000)),
        kind,
        regulatory_status,
        country: "France".to_string(),
        group: (rng.random_range(0..3) == 0).then(|| "Groupe Hexagone".to_string()),
        active: true,
    }
}

/// Module charges scale off premium volume; life and non-life weights
/// depend on the company's business mix.
fn filing(
    company: &Company,
    period: ReportingPeriod,
    premium_dist: &LogNormal<f64>,
    rng: &mut ChaCha20Rng,
) -> SolvencyFiling {
    let premium = premium_dist.sample(rng);
    let jitter = |rng: &mut ChaCha20Rng| rng.random_range(0.85..1.15);

    let (life_w, non_life_w) = match company.kind {
        CompanyKind::Life => (0.20, 0.02),
        CompanyKind::NonLife => (0.02, 0.24),
        CompanyKind::Composite | CompanyKind::Reinsurer => (0.12, 0.14),
        CompanyKind::FinancialInstitution => (0.05, 0.05),
    };
    let modules = RiskModules::new(
        premium * 0.18 * jitter(rng),
        premium * 0.08 * jitter(rng),
        premium * life_w * jitter(rng),
        premium * non_life_w * jitter(rng),
        premium * 0.05 * jitter(rng),
    );

    // Own funds are drawn around the SCR so statuses spread across bands.
    let own_funds = modules.scr() * rng.random_range(0.80..2.20);
    let technical_provisions = premium * 1.6 * jitter(rng);

    SolvencyFiling {
        company_id: company.id,
        period,
        balance: BalanceSheet {
            own_funds,
            technical_provisions,
            annual_premium: premium,
            investments: technical_provisions * 1.1,
            fixed_assets: premium * 0.10,
            claims_incurred: premium * 0.65 * jitter(rng),
        },
        modules,
        breakdown: None,
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let companies: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let periods: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    // Annual premium in millions: median ≈ exp(4.0) ≈ 55.
    let premium_dist = LogNormal::new(4.0, 0.6).expect("invalid LogNormal params");

    let mut status_counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for id in 1..=companies {
        let company = company(id, &mut rng);
        let mut period = ReportingPeriod::new(2025, 1);
        for _ in 0..periods {
            let filing = filing(&company, period, &premium_dist, &mut rng);
            let doc = FilingDocument { company: company.clone(), filing };
            println!("{}", serde_json::to_string(&doc).expect("serialisation failed"));
            *status_counts.entry(assess(&doc.filing).status.label()).or_insert(0) += 1;
            total += 1;
            period = period.next();
        }
    }

    eprintln!("seed_portfolio: {companies} companies × {periods} periods = {total} filings");
    let mut labels: Vec<&str> = status_counts.keys().copied().collect();
    labels.sort_unstable();
    for label in labels {
        eprintln!("  status={label:<14} filings={:>4}", status_counts[label]);
    }
}
