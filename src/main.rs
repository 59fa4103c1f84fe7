use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};

use solva::filing::{FilingDocument, SolvencyFiling, assess};
use solva::indicators::assess_portfolio;
use solva::input::{self, InputError};
use solva::report::{ReportKind, build_report};
use solva::roles::{Capability, Role};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input_path: Option<String> = None;
    let mut portfolio_path: Option<String> = None;
    let mut role = Role::Admin;
    let mut kind = ReportKind::Summary;
    let mut csv_path: Option<String> = None;
    let mut json_path: Option<String> = None;
    let mut date = "n/a".to_string();
    let mut overrides: Vec<String> = Vec::new();
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args[i].clone());
            }
            "--portfolio" => {
                i += 1;
                portfolio_path = Some(args[i].clone());
            }
            "--role" => {
                i += 1;
                role = Role::parse(&args[i])
                    .unwrap_or_else(|| fail(&format!("--role: unknown role '{}'", args[i])));
            }
            "--report" => {
                i += 1;
                kind = ReportKind::parse(&args[i])
                    .unwrap_or_else(|| fail(&format!("--report: unknown report kind '{}'", args[i])));
            }
            "--csv" => {
                i += 1;
                csv_path = Some(args[i].clone());
            }
            "--json" => {
                i += 1;
                json_path = Some(args[i].clone());
            }
            "--date" => {
                i += 1;
                date = args[i].clone();
            }
            "--set" => {
                i += 1;
                overrides.push(args[i].clone());
            }
            "--quiet" => quiet = true,
            _ => {}
        }
        i += 1;
    }

    match (input_path, portfolio_path) {
        (Some(path), None) => {
            run_single(&path, role, kind, csv_path, json_path, &date, &overrides, quiet)
        }
        (None, Some(path)) => run_portfolio(&path, role, quiet),
        _ => fail("expected exactly one of --input <filing.json> or --portfolio <filings.ndjson>"),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("solva: {msg}");
    std::process::exit(2);
}

/// Apply one `field=value` override to the filing. Overriding a
/// correlated module drops any filed sub-risk breakdown, since the
/// detail would no longer tie out to the module total.
fn apply_override(filing: &mut SolvencyFiling, spec: &str) -> Result<(), InputError> {
    let (name, raw) = spec
        .split_once('=')
        .ok_or_else(|| InputError::UnknownField { name: spec.to_string() })?;
    let raw = Some(raw);
    match name {
        "own_funds" => filing.balance.own_funds = input::parse_amount("own_funds", raw)?,
        "technical_provisions" => {
            filing.balance.technical_provisions =
                input::parse_amount("technical_provisions", raw)?;
        }
        "annual_premium" => {
            filing.balance.annual_premium = input::parse_amount("annual_premium", raw)?;
        }
        "investments" => filing.balance.investments = input::parse_amount("investments", raw)?,
        "fixed_assets" => filing.balance.fixed_assets = input::parse_amount("fixed_assets", raw)?,
        "claims_incurred" => {
            filing.balance.claims_incurred = input::parse_amount("claims_incurred", raw)?;
        }
        "market" => {
            filing.modules.market = input::parse_amount("market", raw)?;
            filing.breakdown = None;
        }
        "credit" => {
            filing.modules.credit = input::parse_amount("credit", raw)?;
            filing.breakdown = None;
        }
        "life" => {
            filing.modules.life = input::parse_amount("life", raw)?;
            filing.breakdown = None;
        }
        "non_life" => {
            filing.modules.non_life = input::parse_amount("non_life", raw)?;
            filing.breakdown = None;
        }
        "operational" => filing.modules.operational = input::parse_amount("operational", raw)?,
        _ => return Err(InputError::UnknownField { name: name.to_string() }),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_single(
    path: &str,
    role: Role,
    kind: ReportKind,
    csv_path: Option<String>,
    json_path: Option<String>,
    date: &str,
    overrides: &[String],
    quiet: bool,
) {
    let file = File::open(path).unwrap_or_else(|e| fail(&format!("failed to open {path}: {e}")));
    let mut doc: FilingDocument = serde_json::from_reader(BufReader::new(file))
        .unwrap_or_else(|e| fail(&format!("failed to parse {path}: {e}")));

    for spec in overrides {
        if let Err(e) = apply_override(&mut doc.filing, spec) {
            fail(&format!("--set {spec}: {e}"));
        }
    }

    let needed = if doc.filing.breakdown.is_some() {
        Capability::ComputeAdvancedScr
    } else {
        Capability::ComputeScr
    };
    if !role.can(needed) {
        fail(&format!("role '{}' may not run this calculation", role.label()));
    }

    let assessment = assess(&doc.filing);
    let report = build_report(kind, &doc.company, &doc.filing, &assessment, role, date);

    if !quiet {
        print!("{}", report.render_text());
    }

    if csv_path.is_some() || json_path.is_some() {
        if !role.may_export(kind) {
            fail(&format!("role '{}' may not export this report kind", role.label()));
        }
        if let Some(p) = csv_path {
            let file =
                File::create(&p).unwrap_or_else(|e| fail(&format!("failed to create {p}: {e}")));
            let mut writer = BufWriter::new(file);
            report.write_csv(&mut writer).expect("failed to write CSV");
            if !quiet {
                println!("CSV written to {p}");
            }
        }
        if let Some(p) = json_path {
            let file =
                File::create(&p).unwrap_or_else(|e| fail(&format!("failed to create {p}: {e}")));
            serde_json::to_writer_pretty(BufWriter::new(file), &report)
                .expect("failed to serialize report");
            if !quiet {
                println!("JSON written to {p}");
            }
        }
    }
}

fn run_portfolio(path: &str, role: Role, quiet: bool) {
    if !role.can(Capability::Supervision) {
        fail(&format!("role '{}' may not run portfolio supervision", role.label()));
    }

    let file = File::open(path).unwrap_or_else(|e| fail(&format!("failed to open {path}: {e}")));
    let mut docs: Vec<FilingDocument> = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.unwrap_or_else(|e| fail(&format!("read error at line {}: {e}", lineno + 1)));
        if line.trim().is_empty() {
            continue;
        }
        let doc = serde_json::from_str(&line)
            .unwrap_or_else(|e| fail(&format!("bad filing at line {}: {e}", lineno + 1)));
        docs.push(doc);
    }

    let filings: Vec<_> = docs.iter().map(|d| d.filing.clone()).collect();
    let entries = assess_portfolio(&filings);

    // Worst ratios first.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[a].assessment.ratio.total_cmp(&entries[b].assessment.ratio)
    });

    if !quiet {
        println!(
            "{:<28} | {:>7} | {:>12} | {:>12} | {:>8} | {}",
            "Company", "Period", "SCR", "MCR", "Ratio", "Status"
        );
        println!("{}", "-".repeat(92));
        for &idx in &order {
            let entry = &entries[idx];
            let a = &entry.assessment;
            println!(
                "{:<28} | {:>7} | {:>12.2} | {:>12.2} | {:>7.1}% | {}",
                docs[idx].company.name,
                entry.period,
                a.scr,
                a.mcr,
                a.ratio,
                a.status.label(),
            );
        }
    }

    let non_compliant = entries
        .iter()
        .filter(|e| e.assessment.ratio < 100.0)
        .count();
    eprintln!(
        "portfolio: {} filings assessed, {} below the 100% ratio",
        entries.len(),
        non_compliant
    );
}
