use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per dimension
// ---------------------------------------------------------------------------

/// The four user-chosen sets restricting which records are considered.
///
/// An empty set on any dimension means "exclude all" for that dimension;
/// there is no implicit "all" fallback once the user deselects everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub years: BTreeSet<u16>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// The initial state: every distinct value of every dimension selected.
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            years: dataset.years.clone(),
            seniorities: dataset.seniorities.clone(),
            contracts: dataset.contracts.clone(),
            company_sizes: dataset.company_sizes.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the indices of records passing the current selection, in source
/// row order.
///
/// Conjunction across the four dimensions, membership within each. A record
/// passes only when every field is in the corresponding selected set, so an
/// empty set collapses the view to nothing. Continent and role are never
/// filtered; they stay free dimensions for the charts.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.years.contains(&rec.year)
                && selection.seniorities.contains(&rec.seniority)
                && selection.contracts.contains(&rec.contract)
                && selection.company_sizes.contains(&rec.company_size)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::continent::Continent;
    use crate::data::model::Record;

    fn rec(year: u16, seniority: &str, contract: &str, size: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            company_size: size.to_string(),
            role: "Data Scientist".to_string(),
            remote: "remoto".to_string(),
            country: "US".to_string(),
            usd,
            continent: Continent::from_code("US"),
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            rec(2023, "Senior", "CLT", "L", 150_000.0),
            rec(2023, "Junior", "CLT", "S", 40_000.0),
            rec(2022, "Pleno", "PJ", "M", 90_000.0),
            rec(2021, "Senior", "PJ", "L", 120_000.0),
        ])
    }

    #[test]
    fn selecting_everything_is_the_identity() {
        let ds = sample();
        let selection = FilterSelection::all(&ds);
        assert_eq!(filtered_indices(&ds, &selection), vec![0, 1, 2, 3]);
    }

    #[test]
    fn any_empty_set_collapses_the_view() {
        let ds = sample();

        let mut selection = FilterSelection::all(&ds);
        selection.seniorities.clear();
        assert!(filtered_indices(&ds, &selection).is_empty());

        let mut selection = FilterSelection::all(&ds);
        selection.years.clear();
        assert!(filtered_indices(&ds, &selection).is_empty());
    }

    #[test]
    fn dimensions_combine_as_a_conjunction() {
        let ds = sample();
        let mut selection = FilterSelection::all(&ds);
        selection.years = [2023].into_iter().collect();
        selection.seniorities = ["Senior".to_string()].into_iter().collect();

        // Only row 0 is both from 2023 and Senior.
        assert_eq!(filtered_indices(&ds, &selection), vec![0]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let mut selection = FilterSelection::all(&ds);
        selection.contracts = ["PJ".to_string()].into_iter().collect();

        let once = filtered_indices(&ds, &selection);
        assert_eq!(once, vec![2, 3]);

        // Re-filtering the already-filtered rows with the same selection
        // keeps the same set.
        let narrowed = Dataset::from_records(
            once.iter().map(|&i| ds.records[i].clone()).collect(),
        );
        let twice = filtered_indices(&narrowed, &selection);
        assert_eq!(twice.len(), once.len());
        for (a, &b) in twice.iter().zip(once.iter()) {
            assert_eq!(narrowed.records[*a], ds.records[b]);
        }
    }

    #[test]
    fn source_row_order_is_preserved() {
        let ds = sample();
        let mut selection = FilterSelection::all(&ds);
        selection.seniorities = ["Senior".to_string()].into_iter().collect();
        assert_eq!(filtered_indices(&ds, &selection), vec![0, 3]);
    }
}
