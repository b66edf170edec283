use std::collections::BTreeSet;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible multi-select per dimension.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filters");
    ui.label("Refine the analysis with the filters below.");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= filter_section(ui, "Year", &dataset.years, &mut state.selection.years);
            changed |= filter_section(
                ui,
                "Seniority",
                &dataset.seniorities,
                &mut state.selection.seniorities,
            );
            changed |= filter_section(
                ui,
                "Contract type",
                &dataset.contracts,
                &mut state.selection.contracts,
            );
            changed |= filter_section(
                ui,
                "Company size",
                &dataset.company_sizes,
                &mut state.selection.company_sizes,
            );
        });

    if changed {
        state.refilter();
    }
}

/// One collapsible filter section: All/None buttons plus a checkbox per
/// distinct value. Returns whether the selection changed this frame.
fn filter_section<T>(
    ui: &mut Ui,
    label: &str,
    all_values: &BTreeSet<T>,
    selected: &mut BTreeSet<T>,
) -> bool
where
    T: Ord + Clone + ToString,
{
    let mut changed = false;

    let header_text = format!("{label}  ({}/{})", selected.len(), all_values.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for value in all_values {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value.to_string()).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title, record counts, reload.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Salary Scope");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} matching the current filters",
                ds.len(),
                state.view.len()
            ));
        }

        ui.separator();

        if ui
            .button("Reload")
            .on_hover_text("Drop the cached dataset and fetch it again")
            .clicked()
        {
            state.retry_load();
        }
    });
}
