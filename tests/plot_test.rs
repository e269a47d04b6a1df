use component_space::plot::{hover_label, vertex_labels, PlotData, PlotKind};
use component_space::space::generate;
use component_space::{GridRequest, NimplexEngine};

fn symbols(els: &[&str]) -> Vec<String> {
    els.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_plot_kind_by_dimension() {
    assert_eq!(PlotKind::for_dimension(3).unwrap(), PlotKind::Ternary);
    assert_eq!(PlotKind::for_dimension(4).unwrap(), PlotKind::Tetrahedral);
    for dim in [1, 2, 5, 8] {
        let err = PlotKind::for_dimension(dim).unwrap_err();
        assert!(err.is_validation(), "dimension {dim}");
    }
}

#[test]
fn test_hover_label_lists_nonzero_percentages() {
    let els = symbols(&["Co", "Cr", "Fe"]);
    assert_eq!(hover_label(3, &els, &[0.5, 0.0, 0.5]), "(  3) Co50.0 Fe50.0 ");
    assert_eq!(hover_label(120, &els, &[0.0, 0.0, 1.0]), "(120) Fe100.0 ");
    assert_eq!(
        hover_label(7, &els, &[0.2, 0.4, 0.4]),
        "(  7) Co20.0 Cr40.0 Fe40.0 "
    );
}

#[test]
fn test_vertex_labels_mark_pure_points() {
    let els = symbols(&["Co", "Cr"]);
    let comps = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
    let labels = vertex_labels(&els, &[2, 0], &comps);
    assert_eq!(labels, vec!["<b>Cr</b>", "", "<b>Co</b>"]);
}

#[test]
fn test_vertex_labels_skip_stale_indexes() {
    let els = symbols(&["Co", "Cr"]);
    // A limited grid: index 1 is no longer the Co vertex, index 9 is gone.
    let comps = vec![vec![0.0, 1.0], vec![0.5, 0.5]];
    let labels = vertex_labels(&els, &[1, 0], &comps);
    assert_eq!(labels, vec!["<b>Cr</b>", ""]);
    let labels = vertex_labels(&els, &[9, 0], &comps);
    assert_eq!(labels, vec!["<b>Cr</b>", ""]);
}

#[test]
fn test_ternary_plot_document() {
    let engine = NimplexEngine::new();
    let grid = GridRequest::full(["Co", "Cr", "Fe"], 2).validate().unwrap();
    let table = generate(&engine, &grid).unwrap();
    let plot = PlotData::build(&engine, &grid, &table).unwrap();

    assert_eq!(plot.kind, PlotKind::Ternary);
    assert_eq!(plot.coords.len(), 6);
    assert_eq!(plot.coords[1], [0.0, 0.5, 0.5]);
    assert_eq!(plot.labels[5], "<b>Co</b>");
    assert_eq!(plot.labels[0], "<b>Fe</b>");

    let fig = plot.figure();
    assert_eq!(fig["data"][0]["type"], "scatterternary");
    assert_eq!(fig["layout"]["ternary"]["aaxis"]["title"]["text"], "Co");

    let html = plot.to_html().unwrap();
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("<title>CoCrFe</title>"));
    assert!(html.contains("<b>Co<\\/b>"), "closing tags must be escaped");
}

#[test]
fn test_tetrahedral_plot_document() {
    let engine = NimplexEngine::new();
    let grid = GridRequest::full(["Co", "Cr", "Fe", "Ni"], 2).validate().unwrap();
    let table = generate(&engine, &grid).unwrap();
    let plot = PlotData::build(&engine, &grid, &table).unwrap();

    assert_eq!(plot.kind, PlotKind::Tetrahedral);
    assert_eq!(plot.coords.len(), 10);
    assert_eq!(plot.labels.iter().filter(|l| !l.is_empty()).count(), 4);
    assert_eq!(plot.hover[0], "(  0) Ni100.0 ");

    let fig = plot.figure();
    assert_eq!(fig["data"][0]["type"], "scatter3d");
    assert_eq!(fig["layout"]["width"], 800);
    assert_eq!(fig["layout"]["height"], 700);
}
