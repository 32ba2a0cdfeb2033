//! Registrant input files and the run report.

use serde::{Deserialize, Serialize};
use std::path::Path;

use launch_lottery::SaleRound;
use launch_types::{ParticipantId, Score};

/// One registrant as it appears in the JSON input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrantRecord {
    /// `0x`-prefixed hex or decimal account address.
    pub identifier: String,
    pub score: Score,
}

/// Parse a JSON array of registrant records into parallel vectors.
pub fn parse_registrants(json: &str) -> anyhow::Result<(Vec<ParticipantId>, Vec<Score>)> {
    let records: Vec<RegistrantRecord> = serde_json::from_str(json)?;
    let mut ids = Vec::with_capacity(records.len());
    let mut scores = Vec::with_capacity(records.len());
    for record in records {
        ids.push(record.identifier.parse::<ParticipantId>()?);
        scores.push(record.score);
    }
    Ok((ids, scores))
}

pub fn load_registrants(path: &Path) -> anyhow::Result<(Vec<ParticipantId>, Vec<Score>)> {
    let content = std::fs::read_to_string(path)?;
    parse_registrants(&content)
}

#[derive(Debug, Serialize)]
pub struct AllocationEntry {
    pub identifier: String,
    pub allocation: u128,
}

/// Summary printed after a finalized run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub registrants: usize,
    pub batches: usize,
    pub target_total_winners: u32,
    pub winners: Vec<String>,
    pub allocations: Vec<AllocationEntry>,
}

impl RunReport {
    pub fn from_round(round: &SaleRound, batches: usize) -> Self {
        Self {
            seed: round.params().seed,
            registrants: round.registrant_count(),
            batches,
            target_total_winners: round.params().target_total_winners,
            winners: round.get_winners().iter().map(|id| id.to_hex()).collect(),
            allocations: round
                .engine()
                .ledger()
                .iter()
                .map(|(id, allocation)| AllocationEntry {
                    identifier: id.to_hex(),
                    allocation: allocation.raw(),
                })
                .collect(),
        }
    }
}
