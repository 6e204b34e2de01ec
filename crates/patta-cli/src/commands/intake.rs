//! Intake and geo-link command implementations.

use crate::cli::{AttachArgs, IntakeArgs};
use crate::error::{CliError, Result};
use crate::session::Session;
use patta_domain::traits::{ClaimStore, VillageRegistry};
use patta_domain::Claim;
use patta_lifecycle::{ExtractionRecord, GeoLink};
use serde::Deserialize;
use std::fs;
use std::io::Read;

/// Extraction output: one record or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntakeInput {
    Many(Vec<ExtractionRecord>),
    One(Box<ExtractionRecord>),
}

impl IntakeInput {
    fn into_records(self) -> Vec<ExtractionRecord> {
        match self {
            IntakeInput::Many(records) => records,
            IntakeInput::One(record) => vec![*record],
        }
    }
}

/// Execute the intake command.
pub fn execute_intake(args: IntakeArgs, session: &mut Session) -> Result<()> {
    let contents = read_input(&args)?;
    let records = parse_records(&contents)?;
    let (taken, rejected) = intake_records(records, session)?;

    session.save()?;
    tracing::info!(metrics = %session.lifecycle.metrics().summary(), "Intake finished");

    let formatter = &session.formatter;
    let claims: Vec<&Claim> = taken.iter().collect();
    println!("{}", formatter.format_claims(&claims)?);
    if formatter.is_table() {
        println!("{}", formatter.bulk_result("Took in", taken.len()));
    }
    for (index, error) in &rejected {
        eprintln!("{}", formatter.warning(&format!("Record {} rejected: {}", index + 1, error)));
    }

    Ok(())
}

/// Run each record through the lifecycle and store accepted claims.
///
/// A rejected record does not stop the batch; it is returned with its
/// zero-based position.
pub fn intake_records(
    records: Vec<ExtractionRecord>,
    session: &mut Session,
) -> Result<(Vec<Claim>, Vec<(usize, CliError)>)> {
    let mut taken = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match session.lifecycle.intake(record) {
            Ok(claim) => {
                session.ledger.insert_claim(claim.clone())?;
                taken.push(claim);
            }
            Err(e) => rejected.push((index, e.into())),
        }
    }

    Ok((taken, rejected))
}

fn read_input(args: &IntakeArgs) -> Result<String> {
    match (&args.file, args.stdin) {
        (Some(path), false) => Ok(fs::read_to_string(path)?),
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(_), true) => Err(CliError::InvalidInput(
            "Use either --file or --stdin, not both".to_string(),
        )),
        (None, false) => Err(CliError::InvalidInput(
            "No input given. Use --file <path> or --stdin".to_string(),
        )),
    }
}

fn parse_records(contents: &str) -> Result<Vec<ExtractionRecord>> {
    let input: IntakeInput = serde_json::from_str(contents)?;
    let records = input.into_records();
    if records.is_empty() {
        return Err(CliError::InvalidInput("No extraction records found".to_string()));
    }
    Ok(records)
}

/// Execute the attach command.
pub fn execute_attach(args: AttachArgs, session: &mut Session) -> Result<()> {
    if let Some(name) = &args.village {
        let gazetteer = session.gazetteer()?;
        if gazetteer.find_by_name(name)?.is_none() {
            return Err(CliError::InvalidInput(format!(
                "Village '{}' is not in the gazetteer",
                name
            )));
        }
    }

    let geo_link = GeoLink {
        linked_village_name: args.village,
        confidence_score: args.confidence,
    };

    let id = session.ledger.resolve(&args.id)?;
    let lifecycle = &mut session.lifecycle;
    let claim = session
        .ledger
        .apply(id, |claim| lifecycle.attach_geo_link(claim, &geo_link).map_err(CliError::from))?;
    session.save()?;

    println!("{}", session.formatter.transitioned(&claim, "Geo-linked"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "claimantName": { "value": "Sunita Bai", "confidence": 0.95 },
        "village": { "value": "Khairi", "confidence": 0.9 },
        "claimType": { "value": "IFR", "confidence": 0.9 },
        "area": { "value": "1.2 ha", "confidence": 0.85 },
        "date": { "value": "2021-03-14", "confidence": 0.9 },
        "geoLink": { "linkedVillageName": "Khairi", "confidenceScore": 0.95 }
    }"#;

    #[test]
    fn test_parse_single_record() {
        let records = parse_records(RECORD).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claimant_name.value, "Sunita Bai");
    }

    #[test]
    fn test_parse_record_array() {
        let records = parse_records(&format!("[{}, {}]", RECORD, RECORD)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_empty_array_rejected() {
        assert!(matches!(parse_records("[]"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(matches!(parse_records("{\"nope\": 1}"), Err(CliError::Serialization(_))));
    }

    #[test]
    fn test_read_input_requires_one_source() {
        let neither = IntakeArgs {
            file: None,
            stdin: false,
        };
        assert!(matches!(read_input(&neither), Err(CliError::InvalidInput(_))));

        let both = IntakeArgs {
            file: Some("claims.json".to_string()),
            stdin: true,
        };
        assert!(matches!(read_input(&both), Err(CliError::InvalidInput(_))));
    }
}
