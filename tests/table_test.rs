use component_space::table::{neighbor_column, ResultTable, NODE_ID};
use component_space::EngineError;

fn binary_table() -> ResultTable {
    let elements = vec!["A".to_string(), "B".to_string()];
    let grid = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
    let neighbors = vec![vec![1], vec![0, 2], vec![1]];
    ResultTable::assemble(&elements, grid, neighbors).unwrap()
}

#[test]
fn test_column_order() {
    let table = binary_table();
    assert_eq!(
        table.columns(),
        vec![NODE_ID, "Neighbor_0", "Neighbor_1", "A", "B"]
    );
    assert_eq!(neighbor_column(3), "Neighbor_3");
    assert!(table.has_column("Node ID"));
    assert!(!table.has_column("Neighbor_2"));
}

#[test]
fn test_node_ids_are_dense() {
    let table = binary_table();
    assert_eq!(table.len(), 3);
    assert_eq!(table.node_ids(), vec![0, 1, 2]);
}

#[test]
fn test_element_columns() {
    let table = binary_table();
    assert_eq!(table.element_column("A"), Some(vec![0.0, 0.5, 1.0]));
    assert_eq!(table.element_column("B"), Some(vec![1.0, 0.5, 0.0]));
    assert_eq!(table.element_column("C"), None);
}

#[test]
fn test_csv_pads_ragged_neighbors() {
    let table = binary_table();
    let mut buf = Vec::new();
    table.write_csv(&mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "Node ID,Neighbor_0,Neighbor_1,A,B\n\
         0,1,,0.0,1.0\n\
         1,0,2,0.5,0.5\n\
         2,1,,1.0,0.0\n"
    );
}

#[test]
fn test_csv_reads_back() {
    let table = binary_table();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AB.csv");
    table.to_csv_path(&path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.len(), 5);
    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][0], "1");
    assert_eq!(&rows[1][2], "2");
    assert_eq!(&rows[2][2], "");
}

#[test]
fn test_isolated_nodes_have_no_neighbor_columns() {
    let elements = vec!["A".to_string()];
    let table = ResultTable::assemble(&elements, vec![vec![1.0]], vec![vec![]]).unwrap();
    assert_eq!(table.neighbor_width(), 0);
    assert_eq!(table.columns(), vec![NODE_ID, "A"]);
}

#[test]
fn test_assemble_rejects_mismatched_engine_output() {
    let elements = vec!["A".to_string(), "B".to_string()];
    let err = ResultTable::assemble(&elements, vec![vec![0.0, 1.0]], vec![]).unwrap_err();
    assert!(matches!(err, EngineError::Mismatch { points: 1, neighbor_lists: 0 }));

    let err = ResultTable::assemble(&elements, vec![vec![1.0]], vec![vec![]]).unwrap_err();
    assert!(matches!(err, EngineError::PointShape { index: 0, found: 1, expected: 2 }));
}
