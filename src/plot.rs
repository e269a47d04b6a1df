//! Interactive scatter plots of 3- and 4-component grids.
//!
//! Ternary systems plot their compositions directly on a ternary diagram.
//! Quaternary systems are projected into a tetrahedron by the engine and
//! drawn as a 3D scatter. The figure is written as a standalone HTML page
//! that loads Plotly.js from its CDN.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::engine::GridEngine;
use crate::error::{NimplexError, Result};
use crate::request::ValidGrid;
use crate::table::ResultTable;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const WIDTH: u32 = 800;
const HEIGHT: u32 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// 3 components on a ternary diagram.
    Ternary,
    /// 4 components projected into a tetrahedron.
    Tetrahedral,
}

impl PlotKind {
    /// Plot style for `dimension` components, or a validation error when
    /// the system cannot be drawn.
    pub fn for_dimension(dimension: usize) -> Result<Self> {
        match dimension {
            3 => Ok(PlotKind::Ternary),
            4 => Ok(PlotKind::Tetrahedral),
            _ => Err(NimplexError::validation(
                "Plotting is only supported for 3- and 4-component systems.",
            )),
        }
    }
}

/// Everything needed to draw one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub kind: PlotKind,
    pub title: String,
    pub elements: Vec<String>,
    pub coords: Vec<[f64; 3]>,
    /// Bold element symbol at pure vertices, empty elsewhere.
    pub labels: Vec<String>,
    pub hover: Vec<String>,
}

impl PlotData {
    pub fn build<E: GridEngine + ?Sized>(
        engine: &E,
        grid: &ValidGrid,
        table: &ResultTable,
    ) -> Result<Self> {
        let kind = PlotKind::for_dimension(grid.dimension)?;
        let comps = table.compositions();

        let coords = match kind {
            PlotKind::Ternary => comps.iter().map(|p| [p[0], p[1], p[2]]).collect(),
            PlotKind::Tetrahedral => engine.simplex_to_cartesian(comps)?,
        };

        let pure = engine.pure_component_indexes(grid.dimension, grid.num_division)?;
        let labels = vertex_labels(&grid.elements, &pure, comps);
        let hover = comps
            .iter()
            .enumerate()
            .map(|(i, p)| hover_label(i, &grid.elements, p))
            .collect();

        Ok(Self {
            kind,
            title: grid.system_name(),
            elements: grid.elements.clone(),
            coords,
            labels,
            hover,
        })
    }

    fn axis(&self, k: usize) -> Vec<f64> {
        self.coords.iter().map(|c| c[k]).collect()
    }

    /// Plotly figure as `{"data": [...], "layout": {...}}`.
    pub fn figure(&self) -> Value {
        match self.kind {
            PlotKind::Ternary => json!({
                "data": [{
                    "type": "scatterternary",
                    "mode": "markers+text",
                    "a": self.axis(0),
                    "b": self.axis(1),
                    "c": self.axis(2),
                    "text": self.labels,
                    "textposition": "top center",
                    "hovertext": self.hover,
                    "hoverinfo": "text",
                    "marker": { "size": 6 },
                }],
                "layout": {
                    "title": { "text": self.title },
                    "ternary": {
                        "sum": 1,
                        "aaxis": { "title": { "text": self.elements[0] } },
                        "baxis": { "title": { "text": self.elements[1] } },
                        "caxis": { "title": { "text": self.elements[2] } },
                    },
                    "showlegend": false,
                },
            }),
            PlotKind::Tetrahedral => {
                let axis = json!({
                    "showgrid": false,
                    "zeroline": false,
                    "showline": true,
                    "linecolor": "black",
                    "ticks": "outside",
                    "title": { "text": "" },
                });
                json!({
                    "data": [{
                        "type": "scatter3d",
                        "mode": "markers+text",
                        "x": self.axis(0),
                        "y": self.axis(1),
                        "z": self.axis(2),
                        "text": self.labels,
                        "hovertext": self.hover,
                        "hovertemplate": "<b>%{hovertext}</b><extra></extra>",
                        "marker": { "size": 4, "color": "#1f77b4" },
                    }],
                    "layout": {
                        "title": { "text": self.title },
                        "width": WIDTH,
                        "height": HEIGHT,
                        "paper_bgcolor": "white",
                        "plot_bgcolor": "white",
                        "scene": { "xaxis": axis, "yaxis": axis, "zaxis": axis },
                        "showlegend": false,
                    },
                })
            }
        }
    }

    /// Standalone HTML page rendering the figure.
    pub fn to_html(&self) -> Result<String> {
        let figure = self.figure();
        // `</` inside an inline script would close it early.
        let data = serde_json::to_string(&figure["data"])?.replace("</", "<\\/");
        let layout = serde_json::to_string(&figure["layout"])?.replace("</", "<\\/");
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{cdn}" charset="utf-8"></script>
</head>
<body>
<div id="plot"></div>
<script>
Plotly.newPlot("plot", {data}, {layout});
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            cdn = PLOTLY_CDN,
        ))
    }

    /// Write the page to `path`, replacing any existing file.
    pub fn write_html(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_html()?)?;
        Ok(())
    }
}

/// Hover text for node `i`: `(  3) Co50.0 Fe50.0 `, listing only non-zero
/// components as percentages. Every term, including the last, ends in a
/// space.
pub fn hover_label(i: usize, elements: &[String], comp: &[f64]) -> String {
    let mut label = format!("({i:>3}) ");
    for (el, &v) in elements.iter().zip(comp).filter(|(_, &v)| v > 0.0) {
        label.push_str(&format!("{el}{:.1} ", 100.0 * v));
    }
    label
}

/// Bold symbol at each pure-component vertex. Indexes that fall outside the
/// grid, or land on a point that is not pure in that element (possible when
/// limits cut the simplex), are skipped.
pub fn vertex_labels(elements: &[String], pure: &[usize], comps: &[Vec<f64>]) -> Vec<String> {
    let mut labels = vec![String::new(); comps.len()];
    for (axis, (el, &idx)) in elements.iter().zip(pure).enumerate() {
        let is_pure = comps
            .get(idx)
            .and_then(|p| p.get(axis))
            .is_some_and(|&v| (v - 1.0).abs() < 1e-9);
        if is_pure {
            labels[idx] = format!("<b>{el}</b>");
        }
    }
    labels
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
