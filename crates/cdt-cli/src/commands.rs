use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use cdt_cli::logging::redact_value;
use cdt_cli::render::{
    candidates_table, codes_table, doctor_table, matches_table, note_table,
};
use cdt_match::SuggestionEngine;
use cdt_model::{ProcedureCategory, ProcedureCode, ProcedureEntry};
use cdt_note::{parse_soap_note, suggest_for_note};
use cdt_standards::{CodeCatalog, DoctorReport, load_catalog};

use crate::cli::{Cli, CodesArgs, DoctorArgs, NoteArgs, ShowArgs, SuggestArgs};

pub fn run_suggest(cli: &Cli, args: &SuggestArgs) -> Result<i32> {
    let catalog = load_catalog_for(cli)?;
    let engine = SuggestionEngine::new(catalog.entries().to_vec());

    let query = args.text.join(" ");
    debug!(query = %redact_value(&query), "ranking query against catalog");

    let start = Instant::now();
    let mut matches = match parse_category(args.category.as_deref())? {
        Some(category) => engine.suggest_in_category(&query, category),
        None => engine.suggest(&query),
    };
    let total = matches.len();
    matches.truncate(args.limit);
    info!(
        total_matches = total,
        shown = matches.len(),
        duration_ms = start.elapsed().as_millis(),
        "suggest complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(0);
    }
    if matches.is_empty() {
        println!("No matching codes.");
        return Ok(0);
    }
    println!("{}", matches_table(&matches));
    println!(
        "{total} of {} catalog codes matched; showing {}.",
        catalog.len(),
        matches.len()
    );
    Ok(0)
}

pub fn run_note(cli: &Cli, args: &NoteArgs) -> Result<i32> {
    let text = read_note_text(args)?;
    let note = parse_soap_note(&text).context("parse SOAP note")?;

    let catalog = load_catalog_for(cli)?;
    let engine = SuggestionEngine::new(catalog.entries().to_vec());
    let suggestions = suggest_for_note(&note, &engine, args.limit);
    info!(
        sections = %note_section_summary(&note),
        suggestion_count = suggestions.len(),
        "note processed"
    );

    if args.json {
        let payload = serde_json::json!({
            "note": note,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(0);
    }

    println!("{}", note_table(&note));
    if suggestions.is_empty() {
        println!("No matching codes.");
    } else {
        println!("\nSuggested codes:");
        println!("{}", matches_table(&suggestions));
    }
    Ok(0)
}

pub fn run_codes(cli: &Cli, args: &CodesArgs) -> Result<i32> {
    let catalog = load_catalog_for(cli)?;
    let category = parse_category(args.category.as_deref())?;

    let entries: Vec<ProcedureEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| category.is_none_or(|c| entry.category() == c))
        .cloned()
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(0);
    }
    println!("{}", codes_table(&entries));
    println!("{} codes ({}).", entries.len(), catalog.version());
    Ok(0)
}

pub fn run_show(cli: &Cli, args: &ShowArgs) -> Result<i32> {
    let catalog = load_catalog_for(cli)?;
    let code = ProcedureCode::new(args.code.as_str())?;

    match catalog.get(&code) {
        Some(entry) => {
            println!("Code:        {}", entry.code);
            println!("Category:    {}", entry.category().label());
            println!("Description: {}", entry.description);
            Ok(0)
        }
        None => {
            let engine = SuggestionEngine::new(catalog.entries().to_vec());
            eprintln!("error: {code} is not in catalog {}", catalog.version());
            let candidates = engine.closest_codes(code.as_str(), 3);
            if !candidates.is_empty() {
                eprintln!("Did you mean:");
                eprintln!("{}", candidates_table(&candidates));
            }
            Ok(1)
        }
    }
}

pub fn run_doctor(cli: &Cli, args: &DoctorArgs) -> Result<i32> {
    let catalog = load_catalog_for(cli)?;
    let report = DoctorReport::from_catalog(&catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }
    println!("Catalog:     {}", report.version);
    println!("Source:      {}", report.source);
    println!("Fingerprint: {}", report.fingerprint);
    println!("Codes:       {}", report.counts.codes);
    println!("{}", doctor_table(&report));
    Ok(0)
}

fn load_catalog_for(cli: &Cli) -> Result<CodeCatalog> {
    let start = Instant::now();
    let catalog = load_catalog(cli.standards_dir.as_deref()).context("load code catalog")?;
    info!(
        version = %catalog.version(),
        source = %catalog.source(),
        codes = catalog.len(),
        duration_ms = start.elapsed().as_millis(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn parse_category(value: Option<&str>) -> Result<Option<ProcedureCategory>> {
    match value {
        Some(raw) => Ok(Some(raw.parse::<ProcedureCategory>()?)),
        None => Ok(None),
    }
}

fn read_note_text(args: &NoteArgs) -> Result<String> {
    if args.path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read note from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(&args.path)
            .with_context(|| format!("read note file {}", args.path.display()))
    }
}

fn note_section_summary(note: &cdt_model::SoapNote) -> String {
    let mut present = Vec::new();
    for section in cdt_model::NoteSection::ALL {
        if note.section(section).is_some() {
            present.push(section.heading());
        }
    }
    present.join("+")
}
