//! Chart data preparation and SVG rendering for the radar and progression charts.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use dioxus::prelude::*;

use crate::questionnaire::{ColumnScheme, Score};

use super::report::{Cell, ReportRecord};
use super::sections::Section;
use super::table::ReportTable;
use super::utils::{escape_xml, svg_data_url};
use crate::t;
use crate::views::{use_session, use_settings};

/// Radial range used when every plotted value is zero or missing.
pub const MIN_RANGE: f64 = 1.0;

const PALETTE: [&str; 6] = [
    "#5b8def", "#f0a73a", "#3fb68b", "#e0607e", "#9b7ddc", "#4bc0c8",
];

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub label: String,
    /// Aligned with the chart's categories; `None` marks a missing value.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub categories: Vec<String>,
    pub series: Vec<RadarSeries>,
    pub range: f64,
}

impl RadarChart {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Largest plotted value across all series, never below a usable minimum.
pub fn radial_range(series: &[RadarSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().flatten().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        max
    } else {
        MIN_RANGE
    }
}

fn record_label(record: &ReportRecord, index: usize) -> String {
    match record.date {
        Some(_) => record.date_label(),
        None => format!("Report {}", index + 1),
    }
}

/// Raw per-question cell as plotted: the N/A sentinel and blanks are gaps.
fn plotted(cell: &Cell) -> Option<f64> {
    cell.value()
        .filter(|value| *value != f64::from(Score::SENTINEL))
}

/// Spokes are the schema's data columns. Category tables get one ring per
/// report; per-question tables get one ring per category group per report.
pub fn to_radar_series(table: &ReportTable) -> RadarChart {
    let schema = table.schema();
    let catalog = schema.edition().catalog();
    let categories = schema.data_columns().to_vec();
    let many = table.len() > 1;

    let series: Vec<RadarSeries> = match catalog.scheme {
        ColumnScheme::PerCategory => table
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| RadarSeries {
                label: record_label(record, index),
                values: record.cells.iter().map(Cell::value).collect(),
            })
            .collect(),
        ColumnScheme::PerQuestion => table
            .records()
            .iter()
            .enumerate()
            .flat_map(|(index, record)| {
                catalog.categories.iter().map(move |group| {
                    let values = catalog
                        .questions
                        .iter()
                        .zip(&record.cells)
                        .map(|(question, cell)| {
                            if question.category == *group {
                                plotted(cell)
                            } else {
                                Some(0.0)
                            }
                        })
                        .collect();
                    let label = if many {
                        format!("{group} · {}", record_label(record, index))
                    } else {
                        group.to_string()
                    };
                    RadarSeries { label, values }
                })
            })
            .collect(),
    };

    let range = radial_range(&series);
    RadarChart {
        categories,
        series,
        range,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionPoint {
    pub label: String,
    pub value: f64,
}

/// One scalar per section or report, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progression {
    pub points: Vec<ProgressionPoint>,
}

impl Progression {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn range(&self) -> f64 {
        let max = self
            .points
            .iter()
            .map(|point| point.value)
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() && max > 0.0 {
            max
        } else {
            MIN_RANGE
        }
    }
}

pub fn progression_from_sections(sections: &[Section], normalizer: f64) -> Progression {
    let points = sections
        .iter()
        .enumerate()
        .map(|(index, section)| ProgressionPoint {
            label: section
                .marker
                .map(crate::core::format::format_date)
                .unwrap_or_else(|| format!("Section {}", index + 1)),
            value: section.average(normalizer),
        })
        .collect();
    Progression { points }
}

/// Per-question tables average as `row sum / normalizer` (N/A counted as zero);
/// category tables use the mean of the row's scored categories. Rows with
/// nothing scored are left out.
pub fn progression_from_table(table: &ReportTable, normalizer: f64) -> Progression {
    let scheme = table.schema().edition().catalog().scheme;
    let points = table
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let value = match scheme {
                ColumnScheme::PerQuestion => {
                    if normalizer <= 0.0 {
                        return None;
                    }
                    record
                        .cells
                        .iter()
                        .map(|cell| cell.aggregate().max(0.0))
                        .sum::<f64>()
                        / normalizer
                }
                ColumnScheme::PerCategory => {
                    let scored: Vec<f64> = record.scored_values().collect();
                    if scored.is_empty() {
                        tracing::debug!(row = index + 1, "row has no scored category");
                        return None;
                    }
                    scored.iter().sum::<f64>() / scored.len() as f64
                }
            };
            Some(ProgressionPoint {
                label: record_label(record, index),
                value,
            })
        })
        .collect();
    Progression { points }
}

pub const RADAR_WIDTH: u32 = 720;
pub const RADAR_HEIGHT: u32 = 640;

/// Standalone SVG for a radar chart.
pub fn render_radar_svg(chart: &RadarChart) -> String {
    let width = f64::from(RADAR_WIDTH);
    let legend_h = 24.0 * chart.series.len().min(8) as f64;
    let cx = width / 2.0;
    let cy = (f64::from(RADAR_HEIGHT) - legend_h) / 2.0 + 8.0;
    let radius = (cy - 72.0).max(40.0);
    let spokes = chart.categories.len().max(1);
    let angle = |i: usize| -FRAC_PI_2 + TAU * i as f64 / spokes as f64;
    let point = |i: usize, fraction: f64| {
        let a = angle(i);
        (cx + radius * fraction * a.cos(), cy + radius * fraction * a.sin())
    };

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{RADAR_WIDTH}' height='{RADAR_HEIGHT}' viewBox='0 0 {RADAR_WIDTH} {RADAR_HEIGHT}' font-family='Inter, sans-serif'>"
    );
    let _ = write!(svg, "<rect width='100%' height='100%' fill='#ffffff'/>");

    for ring in 1..=4 {
        let fraction = f64::from(ring) / 4.0;
        let path: Vec<String> = (0..spokes)
            .map(|i| {
                let (x, y) = point(i, fraction);
                format!("{x:.1},{y:.1}")
            })
            .collect();
        let _ = write!(
            svg,
            "<polygon points='{}' fill='none' stroke='#d5d9e2' stroke-width='1'/>",
            path.join(" ")
        );
        let (lx, ly) = point(0, fraction);
        let _ = write!(
            svg,
            "<text x='{:.1}' y='{:.1}' font-size='10' fill='#8a90a0'>{}</text>",
            lx + 4.0,
            ly - 2.0,
            trim_number(chart.range * fraction)
        );
    }

    for (i, category) in chart.categories.iter().enumerate() {
        let (x, y) = point(i, 1.0);
        let _ = write!(
            svg,
            "<line x1='{cx:.1}' y1='{cy:.1}' x2='{x:.1}' y2='{y:.1}' stroke='#d5d9e2' stroke-width='1'/>"
        );
        let (lx, ly) = point(i, 1.12);
        let cos = angle(i).cos();
        let anchor = if cos > 0.2 {
            "start"
        } else if cos < -0.2 {
            "end"
        } else {
            "middle"
        };
        let _ = write!(
            svg,
            "<text x='{lx:.1}' y='{ly:.1}' font-size='12' fill='#30343f' text-anchor='{anchor}' dominant-baseline='middle'>{}</text>",
            escape_xml(category)
        );
    }

    for (index, series) in chart.series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        // Unscored spokes are gaps: the outline joins only scored vertices.
        let path: Vec<String> = series
            .values
            .iter()
            .enumerate()
            .filter_map(|(i, value)| {
                let fraction = (value.as_ref()?.max(0.0) / chart.range).min(1.0);
                let (x, y) = point(i, fraction);
                Some(format!("{x:.1},{y:.1}"))
            })
            .collect();
        if path.is_empty() {
            continue;
        }
        let _ = write!(
            svg,
            "<polygon points='{}' fill='{color}' fill-opacity='0.18' stroke='{color}' stroke-width='2'/>",
            path.join(" ")
        );
    }

    let mut legend_y = f64::from(RADAR_HEIGHT) - legend_h + 8.0;
    for (index, series) in chart.series.iter().take(8).enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let _ = write!(
            svg,
            "<rect x='32' y='{:.1}' width='14' height='14' rx='3' fill='{color}'/><text x='54' y='{:.1}' font-size='13' fill='#30343f'>{}</text>",
            legend_y,
            legend_y + 11.0,
            escape_xml(&series.label)
        );
        legend_y += 24.0;
    }

    svg.push_str("</svg>");
    svg
}

pub const PROGRESSION_WIDTH: u32 = 720;
pub const PROGRESSION_HEIGHT: u32 = 320;

/// Standalone SVG line chart of a progression.
pub fn render_progression_svg(progression: &Progression) -> String {
    let width = f64::from(PROGRESSION_WIDTH);
    let height = f64::from(PROGRESSION_HEIGHT);
    let (left, right, top, bottom) = (56.0, 24.0, 24.0, 56.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;
    let range = progression.range();
    let count = progression.points.len();
    let x_at = |i: usize| {
        if count <= 1 {
            left + plot_w / 2.0
        } else {
            left + plot_w * i as f64 / (count - 1) as f64
        }
    };
    let y_at = |value: f64| top + plot_h * (1.0 - (value.max(0.0) / range).min(1.0));

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{PROGRESSION_WIDTH}' height='{PROGRESSION_HEIGHT}' viewBox='0 0 {PROGRESSION_WIDTH} {PROGRESSION_HEIGHT}' font-family='Inter, sans-serif'>"
    );
    let _ = write!(svg, "<rect width='100%' height='100%' fill='#ffffff'/>");

    for step in 0..=4 {
        let value = range * f64::from(step) / 4.0;
        let y = y_at(value);
        let _ = write!(
            svg,
            "<line x1='{left:.1}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' stroke='#e4e7ee' stroke-width='1'/><text x='{:.1}' y='{:.1}' font-size='11' fill='#8a90a0' text-anchor='end'>{}</text>",
            width - right,
            left - 8.0,
            y + 4.0,
            trim_number(value)
        );
    }

    let path: Vec<String> = progression
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{:.1},{:.1}", x_at(i), y_at(point.value)))
        .collect();
    if count > 1 {
        let _ = write!(
            svg,
            "<polyline points='{}' fill='none' stroke='{}' stroke-width='2.5'/>",
            path.join(" "),
            PALETTE[0]
        );
    }

    for (i, point) in progression.points.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(point.value));
        let _ = write!(
            svg,
            "<circle cx='{x:.1}' cy='{y:.1}' r='4' fill='{}'/><text x='{x:.1}' y='{:.1}' font-size='11' fill='#30343f' text-anchor='middle'>{}</text>",
            PALETTE[0],
            height - bottom + 20.0,
            escape_xml(&point.label)
        );
    }

    svg.push_str("</svg>");
    svg
}

fn trim_number(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[component]
pub fn ResultsCharts() -> Element {
    let session = use_session();
    let settings = use_settings();
    let normalizer = settings.read().progression_normalizer;

    let Some((radar, progression)) = session.with(|state| {
        (
            state.chart().map(render_radar_svg),
            state.progression(normalizer),
        )
    }) else {
        return rsx! {};
    };
    let line = (progression.points.len() > 1).then(|| render_progression_svg(&progression));

    rsx! {
        section { class: "results-card results-charts",
            div { class: "results-card__header",
                h2 { {t!("results-chart-title")} }
            }
            if let Some(svg) = radar {
                img {
                    class: "results-charts__radar",
                    alt: t!("results-chart-alt"),
                    src: svg_data_url(&svg),
                }
            } else {
                p { class: "results-card__placeholder", {t!("results-chart-empty")} }
            }

            if let Some(svg) = line {
                h3 { {t!("results-progression-title")} }
                img {
                    class: "results-charts__progression",
                    alt: t!("results-progression-alt"),
                    src: svg_data_url(&svg),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::Edition;
    use crate::results::sections::DEFAULT_NORMALIZER;
    use time::macros::date;

    fn classic_table(values: &[f64]) -> ReportTable {
        let mut table = ReportTable::for_edition(Edition::Classic);
        table.push(ReportRecord {
            cells: values.iter().copied().map(Cell::Value).collect(),
            date: Some(date!(2024 - 03 - 01)),
        });
        table
    }

    #[test]
    fn classic_rings_follow_category_groups() {
        let chart = to_radar_series(&classic_table(&[2.0; 15]));
        assert_eq!(chart.categories.len(), 15);
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].label, "Impact");
        assert_eq!(chart.series[0].values[0], Some(2.0));
        assert_eq!(chart.series[0].values[5], Some(0.0));
        assert_eq!(chart.series[1].values[5], Some(2.0));
        assert_eq!(chart.range, 2.0);
    }

    #[test]
    fn weighted_rings_follow_reports() {
        let mut table = ReportTable::for_edition(Edition::Weighted);
        for value in [0.25, 0.5] {
            table.push(ReportRecord {
                cells: vec![Cell::Value(value); 15],
                date: Some(date!(2024 - 03 - 01)),
            });
        }
        table.push(ReportRecord {
            cells: vec![Cell::Blank; 15],
            date: None,
        });
        let chart = to_radar_series(&table);
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].label, "03/01/2024");
        assert_eq!(chart.series[2].label, "Report 3");
        assert_eq!(chart.range, 0.5);
    }

    #[test]
    fn range_never_collapses_to_zero() {
        let chart = to_radar_series(&classic_table(&[-1.0; 15]));
        assert_eq!(chart.range, MIN_RANGE);
        assert!(chart.series[0].values[0].is_none());
        assert_eq!(radial_range(&[]), MIN_RANGE);
    }

    #[test]
    fn progression_from_classic_rows_uses_normalizer() {
        let table = classic_table(&[2.0; 15]);
        let progression = progression_from_table(&table, DEFAULT_NORMALIZER);
        assert_eq!(progression.points.len(), 1);
        assert_eq!(progression.points[0].value, 1.0);
    }

    #[test]
    fn progression_skips_unscored_category_rows() {
        let mut table = ReportTable::for_edition(Edition::Weighted);
        table.push(ReportRecord {
            cells: vec![Cell::Blank; 15],
            date: None,
        });
        assert!(progression_from_table(&table, DEFAULT_NORMALIZER).is_empty());
    }

    #[test]
    fn progression_from_sections_labels_by_marker() {
        let sections = vec![
            Section {
                rows: vec![vec!["Q1".into(), "15".into()]],
                marker: Some(date!(2024 - 01 - 10)),
            },
            Section {
                rows: vec![vec!["Q1".into(), "30".into()]],
                marker: None,
            },
        ];
        let progression = progression_from_sections(&sections, DEFAULT_NORMALIZER);
        assert_eq!(progression.points[0].label, "01/10/2024");
        assert_eq!(progression.points[0].value, 0.5);
        assert_eq!(progression.points[1].label, "Section 2");
        assert_eq!(progression.range(), 1.0);
    }

    #[test]
    fn svg_output_is_well_formed_enough() {
        let chart = to_radar_series(&classic_table(&[1.0; 15]));
        let svg = render_radar_svg(&chart);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("fill-opacity").count(), 3);
        assert!(svg.contains("Governance Q15"));

        let line = render_progression_svg(&progression_from_table(
            &classic_table(&[1.0; 15]),
            DEFAULT_NORMALIZER,
        ));
        assert!(line.contains("<circle"));
        assert!(!line.contains("<polyline"));
    }

    fn series_outline(svg: &str) -> Vec<&str> {
        svg.split("<polygon points='")
            .find(|chunk| chunk.contains("fill-opacity"))
            .and_then(|chunk| chunk.split('\'').next())
            .map(|points| points.split(' ').collect())
            .unwrap_or_default()
    }

    #[test]
    fn unscored_spokes_are_left_out_of_the_outline() {
        let mut table = ReportTable::for_edition(Edition::Weighted);
        let mut cells = vec![Cell::Value(1.0); 15];
        cells[0] = Cell::Blank;
        table.push(ReportRecord {
            cells,
            date: Some(date!(2024 - 03 - 01)),
        });
        let chart = to_radar_series(&table);
        assert_eq!(chart.series[0].values[0], None);

        let svg = render_radar_svg(&chart);
        let outline = series_outline(&svg);
        assert_eq!(outline.len(), 14);
        let centre = format!("{:.1},", f64::from(RADAR_WIDTH) / 2.0);
        assert!(outline.iter().all(|vertex| !vertex.starts_with(&centre)));
    }

    #[test]
    fn fully_unscored_series_draws_no_outline() {
        let mut table = ReportTable::for_edition(Edition::Weighted);
        table.push(ReportRecord {
            cells: vec![Cell::Blank; 15],
            date: None,
        });
        let svg = render_radar_svg(&to_radar_series(&table));
        assert!(series_outline(&svg).is_empty());
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn labels_are_escaped() {
        let chart = RadarChart {
            categories: vec!["R&D <core>".into()],
            series: Vec::new(),
            range: MIN_RANGE,
        };
        assert!(render_radar_svg(&chart).contains("R&amp;D &lt;core&gt;"));
    }
}
