use crate::infra::{
    seed_register, InMemoryFeedbackRepository, InMemoryOrganisationRepository,
    InMemoryProfessionRepository,
};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use regulated_professions::error::AppError;
use regulated_professions::register::decisions::{
    self, DecisionCountry, DecisionDataset, DecisionRoute,
};
use regulated_professions::register::feedback::{export_csv, Feedback, FeedbackId, FeedbackKind};
use regulated_professions::register::filtering::FilterInput;
use regulated_professions::register::nations::Nation;
use regulated_professions::register::presenters::{
    organisation_search_view, profession_search_view, Translations,
};
use regulated_professions::register::professions::RegulationType;
use regulated_professions::register::repository::FeedbackRepository;
use regulated_professions::register::RegisterService;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Keywords matched against profession or regulator names
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Nation codes to filter by, e.g. GB-ENG,GB-WLS
    #[arg(long, value_delimiter = ',', value_parser = parse_nation_code)]
    pub(crate) nations: Vec<String>,
    /// Regulation types to filter by: licensing, certification, accreditation
    #[arg(long, value_delimiter = ',', value_parser = parse_regulation_type)]
    pub(crate) regulation_types: Vec<RegulationType>,
    /// Search regulators instead of professions
    #[arg(long)]
    pub(crate) regulators: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FeedbackExportArgs {
    /// Write the CSV to this path instead of standard output
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DecisionsExportArgs {
    /// Write the CSV to this path instead of standard output
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

fn parse_nation_code(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    Nation::find_by_code(trimmed)
        .map(|nation| nation.code.to_string())
        .ok_or_else(|| format!("unknown nation code '{trimmed}'"))
}

fn parse_regulation_type(raw: &str) -> Result<RegulationType, String> {
    RegulationType::from_value(raw).ok_or_else(|| format!("unknown regulation type '{raw}'"))
}

/// Seeds the demo register and runs one search against it.
pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let professions = Arc::new(InMemoryProfessionRepository::default());
    let organisations = Arc::new(InMemoryOrganisationRepository::default());
    seed_register(professions.as_ref(), organisations.as_ref())?;

    let service = RegisterService::new(professions, organisations);
    let filter = FilterInput {
        keywords: args.keywords.unwrap_or_default(),
        nations: args.nations,
        regulation_types: args.regulation_types,
        ..FilterInput::default()
    };
    let translations = Translations::en();

    if args.regulators {
        let view = organisation_search_view(service.search_organisations(&filter)?, &translations);
        println!("{}", view.caption);
        for result in &view.results {
            println!("- {}", result.organisation.name);
            if let Some(telephone) = &result.organisation.telephone {
                println!("  Telephone: {telephone}");
            }
            if let Some(domain) = &result.link_domain {
                println!("  Website: {domain}");
            }
            for profession in &result.professions {
                println!("  Regulates: {}", profession.name);
            }
        }
    } else {
        let view = profession_search_view(service.search_professions(&filter)?, &translations);
        println!("{}", view.caption);
        for result in &view.results {
            let nations: Vec<String> = result
                .occupation_locations
                .iter()
                .map(|code| match Nation::find_by_code(code) {
                    Some(nation) => translations.get(nation.name).to_string(),
                    None => code.clone(),
                })
                .collect();
            println!("- {} ({})", result.name, nations.join(", "));
            if let Some(regulation_type) = result.regulation_type {
                println!("  Regulation: {}", regulation_type.label());
            }
            for organisation in &result.organisations {
                println!("  Regulator: {}", organisation.name);
            }
        }
    }

    Ok(())
}

/// Builds a small feedback store and writes its CSV export.
pub(crate) fn run_feedback_export(args: FeedbackExportArgs) -> Result<(), AppError> {
    let repository = InMemoryFeedbackRepository::default();
    for record in demo_feedback() {
        repository.append(record)?;
    }
    let records = repository.all()?;

    match args.output {
        Some(path) => {
            let mut buffer = Vec::new();
            let rows = export_csv(&records, &mut buffer)?;
            std::fs::write(&path, buffer)?;
            println!("wrote {rows} rows to {}", path.display());
        }
        None => {
            export_csv(&records, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Writes the demo recognition-decision datasets as CSV.
pub(crate) fn run_decisions_export(args: DecisionsExportArgs) -> Result<(), AppError> {
    let datasets = demo_decision_datasets();

    match args.output {
        Some(path) => {
            let mut buffer = Vec::new();
            let rows = decisions::export_csv(&datasets, &mut buffer)?;
            std::fs::write(&path, buffer)?;
            println!("wrote {rows} rows to {}", path.display());
        }
        None => {
            decisions::export_csv(&datasets, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn demo_decision_datasets() -> Vec<DecisionDataset> {
    fn country(code: &str, yes: u32, no: u32) -> DecisionCountry {
        DecisionCountry {
            code: code.to_string(),
            yes,
            no,
            ..DecisionCountry::default()
        }
    }

    vec![
        DecisionDataset {
            profession_name: "Doctor".to_string(),
            organisation_name: "General Medical Council".to_string(),
            year: 2025,
            routes: vec![DecisionRoute {
                name: "International".to_string(),
                countries: vec![country("DE", 42, 5), country("ES", 18, 2)],
            }],
        },
        DecisionDataset {
            profession_name: "Doctor".to_string(),
            organisation_name: "General Medical Council".to_string(),
            year: 2024,
            routes: vec![DecisionRoute {
                name: "International".to_string(),
                countries: vec![country("DE", 37, 8)],
            }],
        },
        DecisionDataset {
            profession_name: "Architect".to_string(),
            organisation_name: "Architects Registration Board".to_string(),
            year: 2025,
            routes: vec![DecisionRoute {
                name: "EEA".to_string(),
                countries: vec![country("FR", 11, 1), country("IE", 6, 0)],
            }],
        },
    ]
}

fn demo_feedback() -> Vec<Feedback> {
    let now = Utc::now();
    vec![
        Feedback {
            id: FeedbackId::new(),
            kind: FeedbackKind::Feedback,
            satisfaction: Some("satisfied".to_string()),
            improvements: Some("Clearer qualification routes.".to_string()),
            visit_reason: Some("check-profession".to_string()),
            visit_reason_other: None,
            contact_authority: Some("no".to_string()),
            contact_authority_no_reason: None,
            problem_area: None,
            problem_area_page: None,
            problem_description: None,
            beta_survey_yes_no: Some("no".to_string()),
            beta_survey_email: None,
            created_at: now,
        },
        Feedback {
            id: FeedbackId::new(),
            kind: FeedbackKind::TechnicalProblem,
            satisfaction: None,
            improvements: None,
            visit_reason: None,
            visit_reason_other: None,
            contact_authority: None,
            contact_authority_no_reason: None,
            problem_area: Some("search".to_string()),
            problem_area_page: Some("/professions/search".to_string()),
            problem_description: Some("Filter checkboxes did not clear.".to_string()),
            beta_survey_yes_no: None,
            beta_survey_email: None,
            created_at: now,
        },
    ]
}
