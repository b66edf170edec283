use std::collections::BTreeMap;

use super::continent::Continent;
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Aggregate outputs
// ---------------------------------------------------------------------------

/// Number of histogram buckets. The edges span the observed min–max of the
/// filtered view, so they shift whenever the view changes.
pub const HISTOGRAM_BINS: usize = 30;

/// Placeholder shown when no rows are selected.
pub const NO_TOP_ROLE: &str = "N/A";

/// The four headline metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub mean_usd: f64,
    pub max_usd: f64,
    pub count: usize,
    pub top_role: String,
}

impl Default for Kpis {
    /// The empty-view policy: zeros and the [`NO_TOP_ROLE`] sentinel.
    fn default() -> Self {
        Kpis {
            mean_usd: 0.0,
            max_usd: 0.0,
            count: 0,
            top_role: NO_TOP_ROLE.to_string(),
        }
    }
}

/// One row of the top-roles table.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMean {
    pub role: String,
    pub mean_usd: f64,
}

/// One salary histogram bucket: `[start, end)`, last bucket inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Record count for one remote-work mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteShare {
    pub mode: String,
    pub count: usize,
}

/// Mean compensation for one residence country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    pub country: String,
    pub mean_usd: f64,
}

/// Mean compensation for one country, tagged with its continent.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentCountryMean {
    pub continent: Continent,
    pub country: String,
    pub mean_usd: f64,
}

/// Everything the dashboard derives from one filtered view. Each field is
/// the output of an independent pure function below; this struct only
/// bundles them so the UI can cache one recompute per filter change.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub kpis: Kpis,
    pub top_roles: Vec<RoleMean>,
    pub histogram: Vec<HistogramBin>,
    pub remote_counts: Vec<RemoteShare>,
    pub country_means: Vec<CountryMean>,
    pub continent_country_means: Vec<ContinentCountryMean>,
}

impl Aggregates {
    pub fn compute(dataset: &Dataset, view: &[usize]) -> Self {
        Aggregates {
            kpis: kpis(dataset, view),
            top_roles: top_roles(dataset, view),
            histogram: histogram(dataset, view),
            remote_counts: remote_counts(dataset, view),
            country_means: country_means(dataset, view),
            continent_country_means: continent_country_means(dataset, view),
        }
    }
}

fn rows<'a>(dataset: &'a Dataset, view: &'a [usize]) -> impl Iterator<Item = &'a Record> {
    view.iter().map(move |&i| &dataset.records[i])
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// Mean, max, count, and the most frequent role of the filtered view.
///
/// Empty view: zeros and [`NO_TOP_ROLE`]. Role ties break to the
/// lexicographically smallest title so repeated runs agree.
pub fn kpis(dataset: &Dataset, view: &[usize]) -> Kpis {
    if view.is_empty() {
        return Kpis::default();
    }

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut role_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for rec in rows(dataset, view) {
        sum += rec.usd;
        max = max.max(rec.usd);
        *role_counts.entry(rec.role.as_str()).or_default() += 1;
    }

    let mut top_role = "";
    let mut top_count = 0;
    for (role, &count) in &role_counts {
        // Strict inequality keeps the first (smallest) role among ties.
        if count > top_count {
            top_role = role;
            top_count = count;
        }
    }

    Kpis {
        mean_usd: sum / view.len() as f64,
        max_usd: max,
        count: view.len(),
        top_role: top_role.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Grouped tables
// ---------------------------------------------------------------------------

/// The ten roles with the highest mean compensation, ascending for display.
///
/// Groups start in lexicographic role order; the stable sort by mean keeps
/// that order among equal means, then the cut to ten is reversed so bar
/// charts grow upwards.
pub fn top_roles(dataset: &Dataset, view: &[usize]) -> Vec<RoleMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in rows(dataset, view) {
        let entry = groups.entry(rec.role.as_str()).or_insert((0.0, 0));
        entry.0 += rec.usd;
        entry.1 += 1;
    }

    let mut means: Vec<RoleMean> = groups
        .into_iter()
        .map(|(role, (sum, n))| RoleMean {
            role: role.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect();

    means.sort_by(|a, b| b.mean_usd.total_cmp(&a.mean_usd));
    means.truncate(10);
    means.reverse();
    means
}

/// Bucket the view's compensation values into [`HISTOGRAM_BINS`] equal-width
/// bins spanning the observed min–max range.
///
/// A degenerate range (all values equal) puts every row in the first bin.
pub fn histogram(dataset: &Dataset, view: &[usize]) -> Vec<HistogramBin> {
    if view.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for rec in rows(dataset, view) {
        min = min.min(rec.usd);
        max = max.max(rec.usd);
    }

    let width = (max - min) / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for rec in rows(dataset, view) {
        let bin = if width > 0.0 {
            (((rec.usd - min) / width) as usize).min(HISTOGRAM_BINS - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Record count per remote-work mode, in mode order.
pub fn remote_counts(dataset: &Dataset, view: &[usize]) -> Vec<RemoteShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in rows(dataset, view) {
        *counts.entry(rec.remote.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(mode, count)| RemoteShare {
            mode: mode.to_string(),
            count,
        })
        .collect()
}

/// Mean compensation per residence country, in country-code order.
/// Includes countries with no continent mapping.
pub fn country_means(dataset: &Dataset, view: &[usize]) -> Vec<CountryMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in rows(dataset, view) {
        let entry = groups.entry(rec.country.as_str()).or_insert((0.0, 0));
        entry.0 += rec.usd;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(country, (sum, n))| CountryMean {
            country: country.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect()
}

/// Mean compensation per (continent, country), ascending by mean.
///
/// Records whose country code has no continent mapping are excluded here;
/// they still count everywhere else.
pub fn continent_country_means(dataset: &Dataset, view: &[usize]) -> Vec<ContinentCountryMean> {
    let mut groups: BTreeMap<(Continent, &str), (f64, usize)> = BTreeMap::new();
    for rec in rows(dataset, view) {
        let Some(continent) = rec.continent else {
            continue;
        };
        let entry = groups
            .entry((continent, rec.country.as_str()))
            .or_insert((0.0, 0));
        entry.0 += rec.usd;
        entry.1 += 1;
    }

    let mut means: Vec<ContinentCountryMean> = groups
        .into_iter()
        .map(|((continent, country), (sum, n))| ContinentCountryMean {
            continent,
            country: country.to_string(),
            mean_usd: sum / n as f64,
        })
        .collect();

    means.sort_by(|a, b| a.mean_usd.total_cmp(&b.mean_usd));
    means
}
