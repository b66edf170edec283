use std::collections::BTreeSet;
use std::sync::Arc;

use crate::color::CategoryColors;
use crate::data::aggregate::Aggregates;
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::loader;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which view the geography section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoTab {
    #[default]
    ByCountry,
    ByContinent,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the loader succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Blocking load error; while set, no dashboard is rendered.
    pub load_error: Option<String>,

    /// The four per-dimension selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current selection (cached).
    pub view: Vec<usize>,

    /// Derived metrics and chart tables for the current view (cached).
    pub aggregates: Aggregates,

    /// Colours for the continent legend.
    pub continent_colors: CategoryColors,

    /// Colours for the remote-mode chart.
    pub remote_colors: CategoryColors,

    /// Active tab of the geography section.
    pub geo_tab: GeoTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            load_error: None,
            selection: FilterSelection::default(),
            view: Vec::new(),
            aggregates: Aggregates::default(),
            continent_colors: CategoryColors::default(),
            remote_colors: CategoryColors::default(),
            geo_tab: GeoTab::default(),
        }
    }
}

impl AppState {
    /// Run the memoized loader and ingest the result.
    pub fn load_dataset(&mut self) {
        match loader::load() {
            Ok(dataset) => {
                log::info!("dataset ready: {} records", dataset.len());
                self.set_dataset(dataset);
            }
            Err(e) => {
                let err = anyhow::Error::new(e);
                log::error!("failed to load dataset: {err:#}");
                self.load_error = Some(format!("{err:#}"));
            }
        }
    }

    /// Drop the cached dataset and fetch again.
    pub fn retry_load(&mut self) {
        loader::invalidate();
        self.load_error = None;
        self.load_dataset();
    }

    /// Ingest a loaded dataset: select everything, build chart colours,
    /// compute the initial view and aggregates.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.selection = FilterSelection::all(&dataset);

        let continents: BTreeSet<String> = dataset
            .records
            .iter()
            .filter_map(|r| r.continent)
            .map(|c| c.name().to_string())
            .collect();
        self.continent_colors = CategoryColors::new(&continents);

        let modes: BTreeSet<String> = dataset
            .records
            .iter()
            .map(|r| r.remote.clone())
            .collect();
        self.remote_colors = CategoryColors::new(&modes);

        self.dataset = Some(dataset);
        self.load_error = None;
        self.refilter();
    }

    /// Recompute the filtered view and every aggregate after a selection
    /// change. This is the whole reactive pipeline; the UI calls it on any
    /// checkbox toggle and reads only the cached outputs while drawing.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = filtered_indices(ds, &self.selection);
            self.aggregates = Aggregates::compute(ds, &self.view);
        } else {
            self.view.clear();
            self.aggregates = Aggregates::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::continent::Continent;
    use crate::data::model::Record;

    fn rec(year: u16, seniority: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            role: "Data Scientist".to_string(),
            remote: "remoto".to_string(),
            country: "US".to_string(),
            usd,
            continent: Continent::from_code("US"),
        }
    }

    #[test]
    fn ingesting_a_dataset_selects_everything() {
        let ds = Arc::new(Dataset::from_records(vec![
            rec(2023, "Senior", 150_000.0),
            rec(2022, "Junior", 40_000.0),
        ]));
        let mut state = AppState::default();
        state.set_dataset(Arc::clone(&ds));

        assert_eq!(state.selection, FilterSelection::all(&ds));
        assert_eq!(state.view, vec![0, 1]);
        assert_eq!(state.aggregates.kpis.count, 2);
    }

    #[test]
    fn refilter_reacts_to_selection_changes() {
        let ds = Arc::new(Dataset::from_records(vec![
            rec(2023, "Senior", 150_000.0),
            rec(2022, "Junior", 40_000.0),
        ]));
        let mut state = AppState::default();
        state.set_dataset(ds);

        state.selection.years.remove(&2022);
        state.refilter();
        assert_eq!(state.view, vec![0]);
        assert_eq!(state.aggregates.kpis.max_usd, 150_000.0);

        state.selection.seniorities.clear();
        state.refilter();
        assert!(state.view.is_empty());
        assert_eq!(state.aggregates.kpis.count, 0);
    }
}
