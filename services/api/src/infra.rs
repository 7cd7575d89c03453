use lead_agent::error::AppError;
use lead_agent::workflows::outreach::{Lead, LeadId, OutreachError};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One row of a CSV lead export. List cells are `;`-separated.
#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    current_title: String,
    #[serde(default)]
    current_company: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    company_size: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    engagement_signals: String,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        let company_size = row.company_size.trim();
        Lead {
            id: LeadId(row.id.trim().to_string()),
            name: row.name,
            current_title: row.current_title,
            current_company: row.current_company,
            location: row.location,
            industry: row.industry,
            company_size: (!company_size.is_empty()).then(|| company_size.to_string()),
            skills: split_list(&row.skills),
            engagement_signals: split_list(&row.engagement_signals),
            score: None,
            score_components: None,
        }
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a lead batch from a `.json` array or a `.csv` export, chosen by extension.
pub(crate) fn load_leads(path: &Path) -> Result<Vec<Lead>, AppError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => read_json_leads(BufReader::new(File::open(path)?)),
        "csv" => read_csv_leads(BufReader::new(File::open(path)?)),
        _ => Err(OutreachError::UnsupportedSource(path.display().to_string()).into()),
    }
}

pub(crate) fn read_json_leads<R: Read>(reader: R) -> Result<Vec<Lead>, AppError> {
    serde_json::from_reader(reader).map_err(|err| AppError::Io(io::Error::from(err)))
}

pub(crate) fn read_csv_leads<R: Read>(reader: R) -> Result<Vec<Lead>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut leads = Vec::new();
    for row in csv_reader.deserialize::<LeadRow>() {
        let row = row.map_err(|err| AppError::Io(io::Error::from(err)))?;
        leads.push(Lead::from(row));
    }
    Ok(leads)
}
