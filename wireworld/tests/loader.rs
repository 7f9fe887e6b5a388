use std::fs;
use std::path::PathBuf;

use wireworld::loader::{load, parse};
use wireworld::{Cell, Dims, LoadError, Pos};

fn dims(rows: usize, cols: usize) -> Option<Dims> {
    Some(Dims::new(rows, cols).unwrap())
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wireworld-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn parses_fixed_size_grid() {
    let grid = parse("tHc\n c \nccc\n", dims(3, 3)).unwrap();
    assert_eq!(grid.get(Pos::new(0, 0)), Some(Cell::Tail));
    assert_eq!(grid.get(Pos::new(0, 1)), Some(Cell::Head));
    assert_eq!(grid.get(Pos::new(1, 0)), Some(Cell::Empty));
    assert_eq!(grid.count(Cell::Conductor), 5);
}

#[test]
fn accepts_crlf_and_missing_final_newline() {
    let grid = parse("cc\r\nHt", dims(2, 2)).unwrap();
    assert_eq!(grid.to_string(), "cc\nHt\n");
}

#[test]
fn wrong_row_count() {
    let err = parse("ccc\nccc\n", dims(3, 3)).unwrap_err();
    assert!(matches!(err, LoadError::RowCount { found: 2, expected: 3 }), "{err}");
    assert_eq!(err.to_string(), "file has 2 rows, the file must have 3 rows");
}

#[test]
fn short_row_is_reported_by_line() {
    let err = parse("ccc\ncc\nccc\n", dims(3, 3)).unwrap_err();
    assert!(matches!(err, LoadError::ColumnCount { line: 2, found: 2, expected: 3 }), "{err}");
}

#[test]
fn counts_every_unexpected_character() {
    let err = parse("cXc\nc?c\nccc\n", dims(3, 3)).unwrap_err();
    assert!(matches!(err, LoadError::UnexpectedCharacters { count: 2 }), "{err}");
    assert_eq!(err.to_string(), "2 unexpected characters");

    let err = parse("cTc\n", dims(1, 3)).unwrap_err();
    assert_eq!(err.to_string(), "1 unexpected character");
}

#[test]
fn non_ascii_is_unexpected() {
    let err = parse("cé\n", dims(1, 2)).unwrap_err();
    assert!(matches!(err, LoadError::UnexpectedCharacters { count: 1 }), "{err}");
}

#[test]
fn infers_size_from_text() {
    let grid = parse("cccc\nHt  \n", None).unwrap();
    assert_eq!(grid.dims(), Dims::new(2, 4).unwrap());

    let err = parse("cccc\nHt\n", None).unwrap_err();
    assert!(matches!(err, LoadError::ColumnCount { line: 2, found: 2, expected: 4 }), "{err}");

    assert!(matches!(parse("", None), Err(LoadError::Empty)));
}

#[test]
fn loads_file_from_disk() {
    let path = temp_file("ok.txt", "tHcc\n    \n");
    let grid = load(&path, dims(2, 4)).unwrap();
    assert_eq!(grid.get(Pos::new(0, 1)), Some(Cell::Head));
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("wireworld-does-not-exist.txt");
    let err = load(&path, None).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }), "{err}");
    assert!(err.to_string().contains("wireworld-does-not-exist.txt"));
}
