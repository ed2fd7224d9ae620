use eframe::egui::{self, Color32, RichText, Ui};

use crate::callback::WidgetId;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::layout::{DropdownOption, SliderMark, Widget};
use crate::state::AppState;
use crate::ui::plot;

/// Transient, render-only state (never seen by the handlers).
#[derive(Debug, Default)]
pub struct UiState {
    /// Text typed into the searchable dropdown.
    pub site_search: String,
}

// ---------------------------------------------------------------------------
// Dashboard page – walks the declarative layout top to bottom
// ---------------------------------------------------------------------------

/// Render every widget of the layout.
pub fn dashboard(ui: &mut Ui, state: &mut AppState, ui_state: &mut UiState) {
    // Clone the tree so we can mutate state while walking it.
    let widgets = state.layout.widgets.clone();

    for widget in &widgets {
        match widget {
            Widget::Heading { text, color } => {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(text)
                            .size(40.0)
                            .color(color.to_color32())
                            .strong(),
                    );
                });
            }
            Widget::Dropdown {
                id,
                options,
                placeholder,
                searchable,
                ..
            } => site_dropdown(
                ui,
                state,
                ui_state,
                *id,
                options,
                placeholder,
                *searchable,
            ),
            Widget::Label(text) => {
                ui.label(text);
            }
            Widget::RangeSlider {
                id,
                min,
                max,
                step,
                marks,
                ..
            } => payload_slider(ui, state, *id, (*min, *max, *step), marks),
            Widget::Graph(target) => {
                plot::chart(ui, *target, state.chart(*target));
            }
            Widget::Spacer => ui.add_space(12.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

fn site_dropdown(
    ui: &mut Ui,
    state: &mut AppState,
    ui_state: &mut UiState,
    id: WidgetId,
    options: &[DropdownOption],
    placeholder: &str,
    searchable: bool,
) {
    let current = state.values.site.token().to_string();
    let selected_text = options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| placeholder.to_string());

    egui::ComboBox::from_id_salt(id.id())
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut ui_state.site_search)
                        .hint_text(placeholder),
                );
                ui.separator();
            }
            let needle = ui_state.site_search.to_lowercase();
            for option in options {
                if !needle.is_empty() && !option.label.to_lowercase().contains(&needle) {
                    continue;
                }
                if ui
                    .selectable_label(current == option.value, &option.label)
                    .clicked()
                {
                    state.set_site(SiteSelection::from_token(&option.value));
                    ui_state.site_search.clear();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Payload range slider (low / high handle pair)
// ---------------------------------------------------------------------------

fn payload_slider(
    ui: &mut Ui,
    state: &mut AppState,
    id: WidgetId,
    (min, max, step): (f64, f64, f64),
    marks: &[SliderMark],
) {
    let PayloadRange { mut lo, mut hi } = state.values.payload;
    let hint = marks_hint(marks);

    ui.push_id(id.id(), |ui: &mut Ui| {
        // Edits clamp to the domain; an observed range outside it is left
        // as loaded until the user moves a handle.
        ui.add(
            egui::Slider::new(&mut lo, min..=max)
                .step_by(step)
                .clamping(egui::SliderClamping::Edits)
                .suffix(" Kg")
                .text("from"),
        )
        .on_hover_text(&hint);
        ui.add(
            egui::Slider::new(&mut hi, min..=max)
                .step_by(step)
                .clamping(egui::SliderClamping::Edits)
                .suffix(" Kg")
                .text("to"),
        )
        .on_hover_text(&hint);

        if lo > hi {
            ui.label(
                RichText::new("Lower bound is above upper bound: no launches selected")
                    .small()
                    .color(Color32::RED),
            );
        }
    });

    state.set_payload_range(PayloadRange::new(lo, hi));
}

/// Tooltip listing the labelled stops of the slider track.
fn marks_hint(marks: &[SliderMark]) -> String {
    if marks.is_empty() {
        return String::new();
    }
    let labels: Vec<&str> = marks.iter().map(|m| m.label.as_str()).collect();
    format!("Marks: {}", labels.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(value: f64) -> SliderMark {
        SliderMark {
            value,
            label: format!("{value} Kg"),
        }
    }

    #[test]
    fn test_marks_hint_lists_labels_in_order() {
        let marks = [mark(0.0), mark(2500.0), mark(5000.0)];
        assert_eq!(marks_hint(&marks), "Marks: 0 Kg | 2500 Kg | 5000 Kg");
    }

    #[test]
    fn test_marks_hint_empty_without_marks() {
        assert_eq!(marks_hint(&[]), "");
    }
}
