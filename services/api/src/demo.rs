use crate::infra::plausibility_service;
use clap::Args;
use propertax::error::AppError;
use propertax::workflows::anlage_v::{
    BuildingCatalog, BuildingId, FieldCode, Finding, FormSnapshot, PlausibilityRequest,
    PropertyContext, UsageType, ValidationReport,
};
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding the form snapshot (line code -> value)
    #[arg(long)]
    pub(crate) form: PathBuf,
    /// Optional building catalog CSV used to resolve --building-id
    #[arg(long)]
    pub(crate) buildings: Option<PathBuf>,
    /// Building the filing refers to
    #[arg(long)]
    pub(crate) building_id: Option<String>,
    /// Print the HTTP response body instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the HTTP response bodies instead of the text summaries
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let ValidateArgs {
        form,
        buildings,
        building_id,
        json,
    } = args;

    let form: FormSnapshot = serde_json::from_reader(BufReader::new(File::open(form)?))?;
    let catalog = match buildings {
        Some(path) => BuildingCatalog::from_path(path)?,
        None => BuildingCatalog::default(),
    };

    let service = plausibility_service(catalog);
    let report = service.check(PlausibilityRequest {
        form_data: Some(form),
        building_id: building_id.map(BuildingId),
    })?;

    print_report(&report, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let building_id = BuildingId("demo-neubau".to_string());
    let mut catalog = BuildingCatalog::default();
    catalog.insert(building_id.clone(), demo_building());
    let service = plausibility_service(catalog);

    println!("Anlage V plausibility demo");
    println!("Building {building_id}: new build (2024), 85 m², purchase price 320000 EUR");

    println!("\n1) Draft with gaps in the header lines");
    let report = service.check(PlausibilityRequest {
        form_data: Some(draft_form()),
        building_id: Some(building_id.clone()),
    })?;
    print_report(&report, args.json)?;

    println!("\n2) Completed filing");
    let report = service.check(PlausibilityRequest {
        form_data: Some(completed_form()),
        building_id: Some(building_id),
    })?;
    print_report(&report, args.json)
}

fn print_report(report: &ValidationReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report.response())?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

pub(crate) fn render_report(report: &ValidationReport) -> String {
    let summary = report.summary();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Status: {} | submittable: {} | {} critical, {} warnings, {} hints",
        report.status().label(),
        if report.can_submit() { "yes" } else { "no" },
        summary.critical_errors,
        summary.warnings,
        summary.hints
    );

    for (title, findings) in [
        ("Critical errors", report.critical()),
        ("Warnings", report.warnings()),
        ("Hints", report.hints()),
    ] {
        if findings.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{title}");
        for finding in findings {
            render_finding(&mut out, finding);
        }
    }

    out
}

fn render_finding(out: &mut String, finding: &Finding) {
    match finding.field {
        Some(field) => {
            let _ = writeln!(out, "- [{}] {}", field.code(), finding.message);
        }
        None => {
            let _ = writeln!(out, "- {}", finding.message);
        }
    }

    if let (Some(expected), Some(actual)) = (finding.expected, finding.actual) {
        let _ = writeln!(out, "    expected {expected:.2}, reported {actual:.2}");
    }
    for text in [
        &finding.detail,
        &finding.impact,
        &finding.fix,
        &finding.action,
        &finding.hint,
    ]
    .into_iter()
    .flatten()
    {
        let _ = writeln!(out, "    {text}");
    }
}

fn demo_building() -> PropertyContext {
    PropertyContext {
        acquisition_price: Some(320_000.0),
        year_built: Some(2024),
        usage_type: Some(UsageType::Residential),
        total_area: Some(85.0),
    }
}

fn draft_form() -> FormSnapshot {
    FormSnapshot::new()
        .with(FieldCode::PropertyAddress, "")
        .with(FieldCode::PostalCodeCity, "")
        .with_null(FieldCode::AcquisitionDate)
        .with(FieldCode::TotalArea, 0.0)
        .with(FieldCode::ReportedIncome, 11_400.0)
        .with(FieldCode::ReportedExpenses, 9_800.0)
        .with(FieldCode::MaintenanceExpense, 5_200.0)
}

fn completed_form() -> FormSnapshot {
    FormSnapshot::new()
        .with(FieldCode::PropertyAddress, "Kastanienallee 8")
        .with(FieldCode::PostalCodeCity, "10435 Berlin")
        .with(FieldCode::AcquisitionDate, "2024-04-01")
        .with(FieldCode::TotalArea, 85.0)
        .with(FieldCode::ContractedRent, 12_000.0)
        .with(FieldCode::ActualRentReceived, 11_400.0)
        .with(FieldCode::ReportedIncome, 11_400.0)
        .with(FieldCode::ReportedDepreciation, 7_000.0)
        .with(FieldCode::MortgageInterest, 6_100.0)
        .with(FieldCode::ReportedExpenses, 13_100.0)
}
