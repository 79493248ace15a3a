//! Roster loading.
//!
//! Turns a [`RawSource`] into a [`RecordStore`]: the male partition first,
//! then the female partition, each record tagged with the gender of the
//! partition it came from.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use roster_model::{Bilingual, Gender, Record, RecordStore, VoterStatus, parse_birth_date};

use crate::error::{IngestError, RecordProblem, Result};
use crate::source::{RawPartition, RawSource, RawVoter};

/// How invalid records are handled. One policy applies to a whole load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Any invalid record aborts the load.
    #[default]
    Strict,
    /// Invalid records are skipped, logged and listed in the [`LoadReport`].
    Lenient,
}

/// A record dropped by a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub partition: Gender,
    pub index: usize,
    pub voter_id: Option<String>,
    pub problem: RecordProblem,
}

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub male: usize,
    pub female: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        self.male + self.female
    }
}

/// Load a roster from an already parsed source document.
///
/// # Errors
///
/// - [`IngestError::MalformedSource`] when neither partition is present, or
///   when a lenient load skipped every record it saw.
/// - [`IngestError::InvalidRecord`] for the first invalid record under
///   [`LoadPolicy::Strict`].
pub fn load(source: &RawSource, policy: LoadPolicy) -> Result<(RecordStore, LoadReport)> {
    if !source.has_partition() {
        return Err(IngestError::MalformedSource {
            reason: "neither male_list nor female_list is present".to_string(),
        });
    }

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    let partitions = [
        (Gender::Male, source.male_list.as_ref()),
        (Gender::Female, source.female_list.as_ref()),
    ];
    for (gender, partition) in partitions {
        let Some(partition) = partition else {
            continue;
        };
        let loaded = load_partition(gender, partition, policy, &mut records, &mut report)?;
        match gender {
            Gender::Male => report.male = loaded,
            Gender::Female => report.female = loaded,
        }
    }

    if records.is_empty() && !report.skipped.is_empty() {
        return Err(IngestError::MalformedSource {
            reason: format!(
                "all {} records were invalid; nothing to serve",
                report.skipped.len()
            ),
        });
    }

    tracing::info!(
        male = report.male,
        female = report.female,
        skipped = report.skipped.len(),
        ?policy,
        "Loaded roster"
    );

    let store = RecordStore::new(source.metadata(), records);
    Ok((store, report))
}

/// Parse and load a roster from JSON text.
pub fn load_str(json: &str, policy: LoadPolicy) -> Result<(RecordStore, LoadReport)> {
    let source: RawSource = serde_json::from_str(json)?;
    load(&source, policy)
}

/// Read, parse and load a roster from a JSON file.
pub fn load_path(path: &Path, policy: LoadPolicy) -> Result<(RecordStore, LoadReport)> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Read roster source");
    load_str(&json, policy)
}

fn load_partition(
    gender: Gender,
    partition: &RawPartition,
    policy: LoadPolicy,
    records: &mut Vec<Record>,
    report: &mut LoadReport,
) -> Result<usize> {
    if let Some(tag) = partition.gender_list.as_deref()
        && tag.parse::<Gender>().ok() != Some(gender)
    {
        tracing::warn!(
            partition = %gender,
            tag,
            "Partition gender tag disagrees with its key; using the key"
        );
    }

    let mut loaded = 0;
    for (index, value) in partition.voters.iter().enumerate() {
        match parse_record(gender, value) {
            Ok(record) => {
                records.push(record);
                loaded += 1;
            }
            Err((voter_id, problem)) => match policy {
                LoadPolicy::Strict => {
                    return Err(IngestError::InvalidRecord {
                        partition: gender,
                        index,
                        voter_id,
                        problem,
                    });
                }
                LoadPolicy::Lenient => {
                    tracing::warn!(partition = %gender, index, %problem, "Skipping invalid record");
                    report.skipped.push(SkippedRecord {
                        partition: gender,
                        index,
                        voter_id,
                        problem,
                    });
                }
            },
        }
    }
    Ok(loaded)
}

type RecordFailure = (Option<String>, RecordProblem);

fn parse_record(gender: Gender, value: &Value) -> std::result::Result<Record, RecordFailure> {
    let raw = RawVoter::deserialize(value)
        .map_err(|err| (None, RecordProblem::Shape(err.to_string())))?;
    let voter_id = raw.voter_no.clone().filter(|id| !id.trim().is_empty());
    validate(gender, raw).map_err(|problem| (voter_id, problem))
}

fn validate(gender: Gender, raw: RawVoter) -> std::result::Result<Record, RecordProblem> {
    let serial = raw.serial.ok_or(RecordProblem::MissingField("serial"))?;
    let voter_id = raw
        .voter_no
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(RecordProblem::MissingField("voter_no"))?;
    let name = Bilingual::new(
        required(raw.name_en, "name_en")?,
        required(raw.name_bn, "name_bn")?,
    );
    let profession = Bilingual::new(
        required(raw.profession_en, "profession_en")?,
        required(raw.profession_bn, "profession_bn")?,
    );
    let address = Bilingual::new(
        required(raw.address_en, "address_en")?,
        required(raw.address_bn, "address_bn")?,
    );
    let birthdate = required(raw.birthdate, "birthdate")?;
    let birth_date =
        parse_birth_date(&birthdate).map_err(|_| RecordProblem::InvalidBirthDate(birthdate))?;
    let status_text = required(raw.status, "status")?;
    let status = status_text
        .parse::<VoterStatus>()
        .map_err(|_| RecordProblem::InvalidStatus(status_text))?;

    Ok(
        Record::new(serial, voter_id, name, gender, status, birth_date)
            .with_father(raw.father_en, raw.father_bn)
            .with_mother(raw.mother_en, raw.mother_bn)
            .with_spouse(raw.spouse_en, raw.spouse_bn)
            .with_profession(profession)
            .with_address(address),
    )
}

fn required(value: Option<String>, field: &'static str) -> std::result::Result<String, RecordProblem> {
    value.ok_or(RecordProblem::MissingField(field))
}
