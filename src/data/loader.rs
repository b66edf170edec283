use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use super::model::{Dataset, RawRow, Record};

// ---------------------------------------------------------------------------
// Source location and schema
// ---------------------------------------------------------------------------

/// The published salary-survey CSV. Fixed; the loader takes no parameters.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Columns that must be present in the source CSV header.
const REQUIRED_COLUMNS: &[&str] = &[
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "remoto",
    "residencia_iso3",
    "usd",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the dataset is unavailable. The UI surfaces this as a blocking
/// error screen rather than rendering a partial dashboard.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("fetching salary dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("reading source CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("source CSV is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("source CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Memoized load
// ---------------------------------------------------------------------------

/// Dataset cache: filled on the first successful [`load`], shared read-only
/// afterwards. Failures are not cached, so a later call retries the fetch.
static CACHE: Mutex<Option<Arc<Dataset>>> = Mutex::new(None);

/// Fetch, parse, and enrich the dataset, memoized for the process lifetime.
///
/// The first call blocks on the network; every later call returns the
/// cached `Arc` until [`invalidate`] is called.
pub fn load() -> Result<Arc<Dataset>, DataError> {
    let mut slot = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(ds) = slot.as_ref() {
        return Ok(Arc::clone(ds));
    }

    let dataset = Arc::new(fetch_dataset()?);
    log::info!(
        "loaded {} salary records covering {} survey years",
        dataset.len(),
        dataset.years.len()
    );
    *slot = Some(Arc::clone(&dataset));
    Ok(dataset)
}

/// Drop the cached dataset so the next [`load`] re-fetches.
pub fn invalidate() {
    *CACHE.lock().unwrap_or_else(PoisonError::into_inner) = None;
}

fn fetch_dataset() -> Result<Dataset, DataError> {
    let body = reqwest::blocking::get(DATA_URL)?
        .error_for_status()?
        .text()?;
    parse_csv(&body)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the raw CSV body into an enriched [`Dataset`].
///
/// Fails fast when a required column is absent or a row does not parse;
/// a silently truncated dataset would be worse than no dashboard.
pub fn parse_csv(body: &str) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    for &required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.map_err(|source| DataError::Row {
            row: row_no,
            source,
        })?;
        records.push(Record::from(raw));
    }

    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::continent::Continent;

    const SAMPLE: &str = "\
ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd
2023,Senior,CLT,L,Data Scientist,remoto,US,150000
2023,Junior,CLT,S,Data Analyst,hibrido,BR,40000
2022,Pleno,PJ,M,Data Engineer,presencial,XX,90000
";

    #[test]
    fn parses_rows_in_source_order_with_continents() {
        let ds = parse_csv(SAMPLE).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].role, "Data Scientist");
        assert_eq!(ds.records[0].continent, Some(Continent::NorthAmerica));
        assert_eq!(ds.records[1].country, "BR");
        assert_eq!(ds.records[1].continent, Some(Continent::SouthAmerica));
        // Unmapped code: continent stays undefined, the row is still loaded.
        assert_eq!(ds.records[2].continent, None);

        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![2022, 2023]);
        assert_eq!(
            ds.company_sizes.iter().cloned().collect::<Vec<_>>(),
            vec!["L", "M", "S"]
        );
    }

    #[test]
    fn missing_required_column_fails_fast() {
        let body = "\
ano,senioridade,contrato,tamanho_empresa,cargo,remoto,usd
2023,Senior,CLT,L,Data Scientist,remoto,150000
";
        match parse_csv(body) {
            Err(DataError::MissingColumn(col)) => assert_eq!(col, "residencia_iso3"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_compensation_reports_the_row() {
        let body = "\
ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd
2023,Senior,CLT,L,Data Scientist,remoto,US,150000
2023,Junior,CLT,S,Data Analyst,hibrido,BR,not-a-number
";
        match parse_csv(body) {
            Err(DataError::Row { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let body = "\
ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd,moeda
2023,Senior,CLT,L,Data Scientist,remoto,US,150000,USD
";
        let ds = parse_csv(body).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].usd, 150_000.0);
    }
}
