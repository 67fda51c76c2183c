use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{generate_palette, outcome_color};
use crate::data::aggregate::OutcomeSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One pie slice, as angles in radians. Slices run clockwise from 12 o'clock,
/// so `end < start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    pub slot: usize,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    pub fn fraction(&self) -> f64 {
        (self.start - self.end) / TAU
    }

    fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Lay out slices around the unit circle. Zero-count slices get no wedge but
/// keep their `slot` so colours stay stable.
pub fn pie_wedges(slices: &[(String, usize)]) -> Vec<Wedge> {
    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = FRAC_PI_2;
    slices
        .iter()
        .enumerate()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(slot, (label, count))| {
            let sweep = TAU * (*count as f64 / total as f64);
            let wedge = Wedge {
                label: label.clone(),
                count: *count,
                slot,
                start: angle,
                end: angle - sweep,
            };
            angle -= sweep;
            wedge
        })
        .collect()
}

/// Split a wedge into convex fans of at most a quarter turn each, since plot
/// polygons are filled as convex shapes.
pub fn wedge_pieces(wedge: &Wedge) -> Vec<Vec<[f64; 2]>> {
    const SEGMENTS_PER_QUARTER: usize = 24;

    let sweep = wedge.start - wedge.end;
    // Tolerate rounding so a full circle stays at four pieces.
    let n_pieces = (sweep / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
    let piece_sweep = sweep / n_pieces as f64;

    (0..n_pieces)
        .map(|p| {
            let from = wedge.start - p as f64 * piece_sweep;
            let mut pts = Vec::with_capacity(SEGMENTS_PER_QUARTER + 2);
            pts.push([0.0, 0.0]);
            for s in 0..=SEGMENTS_PER_QUARTER {
                let a = from - piece_sweep * s as f64 / SEGMENTS_PER_QUARTER as f64;
                pts.push([a.cos(), a.sin()]);
            }
            pts
        })
        .collect()
}

fn slice_color(summary: &OutcomeSummary, palette: &[Color32], slot: usize) -> Color32 {
    match summary {
        OutcomeSummary::BySite(_) => palette.get(slot).copied().unwrap_or(Color32::GRAY),
        OutcomeSummary::ByOutcome(counts) => counts
            .keys()
            .nth(slot)
            .map(|o| outcome_color(*o))
            .unwrap_or(Color32::GRAY),
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the site-outcome pie.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.pie_title());
    });

    let empty_note = if state.summary.is_empty() {
        Some("No launches for this site")
    } else if state.summary.total() == 0 {
        Some("No successful launches to show")
    } else {
        None
    };
    if let Some(note) = empty_note {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(note);
        });
        return;
    }

    let slices = state.summary.slices();
    let wedges = pie_wedges(&slices);

    let palette = generate_palette(slices.len());

    Plot::new("outcome_pie")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for wedge in &wedges {
                let color = slice_color(&state.summary, &palette, wedge.slot);
                // Pieces share a name so the legend shows one entry per slice.
                let name = format!("{} ({})", wedge.label, wedge.count);
                for piece in wedge_pieces(wedge) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(piece))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                let a = wedge.mid_angle();
                let pct = format!("{:.1}%", wedge.fraction() * 100.0);
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(0.65 * a.cos(), 0.65 * a.sin()),
                        RichText::new(pct).strong(),
                    )
                    .color(Color32::WHITE),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Payload scatter chart
// ---------------------------------------------------------------------------

/// Render payload mass against outcome class, one series per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.scatter_title());
    });

    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for rec in state.visible_records() {
        let (payload, class, booster) = rec.scatter_point();
        series.entry(booster).or_default().push([payload, class as f64]);
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.slider.min)
        .include_x(state.slider.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (booster, points) in series {
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(booster)
                        .color(state.color_map.color_for(booster))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(counts: &[(&str, usize)]) -> Vec<(String, usize)> {
        counts.iter().map(|(l, n)| (l.to_string(), *n)).collect()
    }

    #[test]
    fn wedges_cover_full_circle_proportionally() {
        let wedges = pie_wedges(&slices(&[("A", 1), ("B", 3)]));
        assert_eq!(wedges.len(), 2);
        assert!((wedges[0].fraction() - 0.25).abs() < 1e-12);
        assert!((wedges[1].fraction() - 0.75).abs() < 1e-12);
        assert!((wedges[0].start - FRAC_PI_2).abs() < 1e-12);
        assert!((wedges[0].end - wedges[1].start).abs() < 1e-12);
        let swept: f64 = wedges.iter().map(|w| w.start - w.end).sum();
        assert!((swept - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_slices_are_skipped_but_keep_slot() {
        let wedges = pie_wedges(&slices(&[("Success", 4), ("Failure", 0), ("X", 4)]));
        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[1].label, "X");
        assert_eq!(wedges[1].slot, 2);
    }

    #[test]
    fn no_counts_no_wedges() {
        assert!(pie_wedges(&slices(&[("A", 0), ("B", 0)])).is_empty());
        assert!(pie_wedges(&[]).is_empty());
    }

    #[test]
    fn full_circle_splits_into_convex_pieces() {
        let wedges = pie_wedges(&slices(&[("A", 7)]));
        let pieces = wedge_pieces(&wedges[0]);
        assert_eq!(pieces.len(), 4);
        for piece in &pieces {
            assert_eq!(piece[0], [0.0, 0.0]);
            for p in &piece[1..] {
                let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
                assert!((r - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn small_wedge_is_one_piece() {
        let wedges = pie_wedges(&slices(&[("A", 1), ("B", 9)]));
        assert_eq!(wedge_pieces(&wedges[0]).len(), 1);
        assert_eq!(wedge_pieces(&wedges[1]).len(), 4);
    }
}
