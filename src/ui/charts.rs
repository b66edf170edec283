use std::collections::BTreeMap;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::generate_palette;
use crate::data::aggregate::Kpis;
use crate::data::continent::Continent;
use crate::data::model::Dataset;
use crate::state::{AppState, GeoTab};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Central dashboard
// ---------------------------------------------------------------------------

/// Render the whole central panel: KPI row, chart grid, raw-data table.
/// Everything drawn here reads the cached outputs in `state`; filtering and
/// aggregation happen in `AppState::refilter`, not during painting.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Loading dataset…");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Data Careers Salary Dashboard");
            ui.label("Market overview, annual USD. Use the sidebar filters to refine.");
            ui.add_space(8.0);

            kpi_row(ui, &state.aggregates.kpis);
            ui.separator();

            ui.columns(2, |cols: &mut [Ui]| {
                top_roles_chart(&mut cols[0], state);
                histogram_chart(&mut cols[1], state);
            });
            ui.add_space(8.0);
            ui.columns(2, |cols: &mut [Ui]| {
                remote_chart(&mut cols[0], state);
                geography_section(&mut cols[1], state);
            });

            ui.separator();
            raw_data_table(ui, &dataset, state);
        });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    ui.columns(4, |cols: &mut [Ui]| {
        kpi(&mut cols[0], "Mean salary", &format_usd(kpis.mean_usd));
        kpi(&mut cols[1], "Highest salary", &format_usd(kpis.max_usd));
        kpi(&mut cols[2], "Records", &format_count(kpis.count));
        kpi(&mut cols[3], "Most common role", &kpis.top_role);
    });
}

fn kpi(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(20.0).strong());
    });
}

fn no_data(ui: &mut Ui) {
    ui.label(RichText::new("No data for the current filters.").weak());
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Horizontal bars: the ten best-paid roles, lowest mean at the bottom.
fn top_roles_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top 10 roles by mean salary");
    let table = &state.aggregates.top_roles;
    if table.is_empty() {
        no_data(ui);
        return;
    }

    let palette = generate_palette(table.len());
    Plot::new("top_roles")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .show_axes([true, false])
        .x_axis_label("Mean salary (USD)")
        .show(ui, |plot_ui| {
            for (i, (row, color)) in table.iter().zip(palette).enumerate() {
                let bar = Bar::new(i as f64, row.mean_usd).name(&row.role).width(0.7);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .name(&row.role)
                        .color(color),
                );
            }
        });
}

/// Salary histogram over the filtered view's observed range.
fn histogram_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Salary distribution");
    let hist = &state.aggregates.histogram;
    if hist.is_empty() {
        no_data(ui);
        return;
    }

    let bin_width = hist[0].end - hist[0].start;
    let bars: Vec<Bar> = hist
        .iter()
        .map(|bin| {
            Bar::new((bin.start + bin.end) / 2.0, bin.count as f64)
                .width(bin_width.max(1.0))
        })
        .collect();

    Plot::new("salary_hist")
        .height(CHART_HEIGHT)
        .x_axis_label("Salary (USD)")
        .y_axis_label("Records")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("salaries")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

/// Record counts per remote-work mode.
fn remote_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Work mode");
    let shares = &state.aggregates.remote_counts;
    if shares.is_empty() {
        no_data(ui);
        return;
    }

    Plot::new("work_mode")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .show_axes([false, true])
        .y_axis_label("Records")
        .show(ui, |plot_ui| {
            for (i, share) in shares.iter().enumerate() {
                let color = state.remote_colors.color_for(&share.mode);
                let bar = Bar::new(i as f64, share.count as f64)
                    .name(&share.mode)
                    .width(0.7);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(&share.mode).color(color));
            }
        });
}

/// Geography: mean salary per country, plain or grouped by continent.
fn geography_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Salary geography");
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.geo_tab, GeoTab::ByCountry, "By country");
        ui.selectable_value(&mut state.geo_tab, GeoTab::ByContinent, "By continent");
    });

    match state.geo_tab {
        GeoTab::ByCountry => country_chart(ui, state),
        GeoTab::ByContinent => continent_chart(ui, state),
    }
}

fn country_chart(ui: &mut Ui, state: &AppState) {
    if state.aggregates.country_means.is_empty() {
        no_data(ui);
        return;
    }

    // Display order: cheapest country at the bottom.
    let mut rows = state.aggregates.country_means.clone();
    rows.sort_by(|a, b| a.mean_usd.total_cmp(&b.mean_usd));

    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| Bar::new(i as f64, row.mean_usd).name(&row.country).width(0.7))
        .collect();

    Plot::new("country_means")
        .height(CHART_HEIGHT)
        .show_axes([true, false])
        .x_axis_label("Mean salary (USD)")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .name("countries")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

fn continent_chart(ui: &mut Ui, state: &AppState) {
    let table = &state.aggregates.continent_country_means;
    if table.is_empty() {
        no_data(ui);
        return;
    }

    // The table is already ascending by mean; the row index becomes the bar
    // position so all continents share one axis.
    let mut by_continent: BTreeMap<Continent, Vec<Bar>> = BTreeMap::new();
    for (i, row) in table.iter().enumerate() {
        by_continent.entry(row.continent).or_default().push(
            Bar::new(i as f64, row.mean_usd).name(&row.country).width(0.7),
        );
    }

    Plot::new("continent_means")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .show_axes([true, false])
        .x_axis_label("Mean salary (USD)")
        .show(ui, |plot_ui| {
            for (continent, bars) in by_continent {
                let color = state.continent_colors.color_for(continent.name());
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .name(continent.name())
                        .color(color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Raw data
// ---------------------------------------------------------------------------

/// The full filtered view as a virtualized table.
fn raw_data_table(ui: &mut Ui, dataset: &Dataset, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Raw data").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if state.view.is_empty() {
                no_data(ui);
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().resizable(true), 9)
                .header(20.0, |mut header| {
                    for title in [
                        "Year",
                        "Seniority",
                        "Contract",
                        "Size",
                        "Role",
                        "Work mode",
                        "Country",
                        "Continent",
                        "USD",
                    ] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, state.view.len(), |mut row| {
                        let rec = &dataset.records[state.view[row.index()]];
                        row.col(|ui: &mut Ui| {
                            ui.label(rec.year.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.seniority);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.contract);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.company_size);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.role);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.remote);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.country);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(rec.continent.map(Continent::name).unwrap_or("—"));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format_usd(rec.usd));
                        });
                    });
                });
        });
}

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Format a USD amount with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("${}.{frac}", group_thousands(int_part))
}

/// Format a record count with thousands separators.
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
