use std::collections::BTreeSet;

use serde::Deserialize;

use super::continent::Continent;

// ---------------------------------------------------------------------------
// Record – one salary observation (one row of the source CSV)
// ---------------------------------------------------------------------------

/// A single employment observation from the salary survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Survey year.
    pub year: u16,
    /// Seniority level ("Junior", "Pleno", "Senior", ...).
    pub seniority: String,
    /// Contract type (full-time, part-time, ...).
    pub contract: String,
    /// Company size bucket ("S", "M", "L").
    pub company_size: String,
    /// Role title ("Data Scientist", ...).
    pub role: String,
    /// Remote-work mode (on-site, hybrid, remote).
    pub remote: String,
    /// Residence country code as it appears in the source.
    pub country: String,
    /// Normalized annual compensation in USD.
    pub usd: f64,
    /// Continent resolved from `country` at load time; `None` when the
    /// code is absent from the static table.
    pub continent: Option<Continent>,
}

/// Raw CSV row as published by the source. Field names are the dataset's
/// own column headers; the loader maps them onto [`Record`] fields and
/// resolves the continent.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub ano: u16,
    pub senioridade: String,
    pub contrato: String,
    pub tamanho_empresa: String,
    pub cargo: String,
    pub remoto: String,
    pub residencia_iso3: String,
    pub usd: f64,
}

impl From<RawRow> for Record {
    fn from(raw: RawRow) -> Self {
        let continent = Continent::from_code(&raw.residencia_iso3);
        Record {
            year: raw.ano,
            seniority: raw.senioridade,
            contract: raw.contrato,
            company_size: raw.tamanho_empresa,
            role: raw.cargo,
            remote: raw.remoto,
            country: raw.residencia_iso3,
            usd: raw.usd,
            continent,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct values per
/// filterable dimension. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in source row order.
    pub records: Vec<Record>,
    /// Distinct survey years, ascending.
    pub years: BTreeSet<u16>,
    /// Distinct seniority levels, ascending.
    pub seniorities: BTreeSet<String>,
    /// Distinct contract types, ascending.
    pub contracts: BTreeSet<String>,
    /// Distinct company sizes, ascending.
    pub company_sizes: BTreeSet<String>,
}

impl Dataset {
    /// Build the per-dimension distinct-value indexes from the loaded rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contracts = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            seniorities.insert(rec.seniority.clone());
            contracts.insert(rec.contract.clone());
            company_sizes.insert(rec.company_size.clone());
        }

        Dataset {
            records,
            years,
            seniorities,
            contracts,
            company_sizes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: u16, seniority: &str, role: &str, country: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            role: role.to_string(),
            remote: "remoto".to_string(),
            country: country.to_string(),
            usd,
            continent: Continent::from_code(country),
        }
    }

    #[test]
    fn distinct_values_are_sorted_ascending() {
        let ds = Dataset::from_records(vec![
            rec(2023, "Senior", "Data Scientist", "US", 150_000.0),
            rec(2021, "Junior", "Data Analyst", "BR", 40_000.0),
            rec(2022, "Pleno", "Data Engineer", "DE", 90_000.0),
        ]);

        assert_eq!(
            ds.years.iter().copied().collect::<Vec<_>>(),
            vec![2021, 2022, 2023]
        );
        assert_eq!(
            ds.seniorities.iter().cloned().collect::<Vec<_>>(),
            vec!["Junior", "Pleno", "Senior"]
        );
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn raw_row_conversion_resolves_continent() {
        let raw = RawRow {
            ano: 2023,
            senioridade: "Senior".to_string(),
            contrato: "CLT".to_string(),
            tamanho_empresa: "L".to_string(),
            cargo: "Data Scientist".to_string(),
            remoto: "remoto".to_string(),
            residencia_iso3: "US".to_string(),
            usd: 150_000.0,
        };
        let rec = Record::from(raw);
        assert_eq!(rec.continent, Some(Continent::NorthAmerica));
        assert_eq!(rec.country, "US");

        let unmapped = RawRow {
            ano: 2023,
            senioridade: "Junior".to_string(),
            contrato: "CLT".to_string(),
            tamanho_empresa: "S".to_string(),
            cargo: "Data Analyst".to_string(),
            remoto: "hibrido".to_string(),
            residencia_iso3: "XX".to_string(),
            usd: 40_000.0,
        };
        assert_eq!(Record::from(unmapped).continent, None);
    }
}
