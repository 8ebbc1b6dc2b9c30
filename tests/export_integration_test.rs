//! End-to-end export tests against real `.xlsx` packages

mod common;

use common::{num, text, Cell, FixtureSheet, Workspace};
use sheetcsv::core::export::{
    discover_workbooks, ExportErrorType, ExportOptions, Exporter, RunStatus,
};
use std::fs;

fn run(workspace: &Workspace) -> sheetcsv::core::export::ExportSummary {
    Exporter::xlsx(ExportOptions::default()).export(&workspace.dataset)
}

fn read(workspace: &Workspace, relative: &str) -> String {
    fs::read_to_string(workspace.output(relative)).unwrap()
}

fn simple_sheet(name: &str) -> FixtureSheet {
    FixtureSheet::new(
        name,
        vec![
            vec![text("a"), text("b")],
            vec![num(1.0), num(2.0)],
            vec![num(3.0), num(4.0)],
        ],
    )
}

#[test]
fn test_discovery_only_sees_top_level_workbooks() {
    let ws = Workspace::new();
    ws.add_workbook("one.xlsx", &[simple_sheet("S")]);
    ws.add_workbook("two.xlsx", &[simple_sheet("S")]);
    ws.add_workbook("three.xlsx", &[simple_sheet("S")]);
    ws.add_file("notes.txt", b"hello");
    ws.add_file("legacy.xls", b"not a zip");
    let nested = ws.dataset.join("archive");
    fs::create_dir(&nested).unwrap();
    common::write_xlsx(&nested.join("old.xlsx"), &[simple_sheet("S")]);

    let found = discover_workbooks(&ws.dataset, "xlsx").unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["one.xlsx", "three.xlsx", "two.xlsx"]);

    let summary = run(&ws);
    assert_eq!(summary.workbooks_found(), 3);
    assert!(!ws.output("archive").exists());
    assert!(!ws.output("old").exists());
}

#[test]
fn test_simple_sheet_content() {
    let ws = Workspace::new();
    ws.add_workbook("numbers.xlsx", &[simple_sheet("Data")]);

    let summary = run(&ws);

    assert_eq!(summary.status, RunStatus::Completed);
    assert!(summary.is_successful());
    assert_eq!(read(&ws, "numbers/Data.csv"), "a,b\n1,2\n3,4\n");
}

#[test]
fn test_output_layout_per_workbook() {
    let ws = Workspace::new();
    ws.add_workbook(
        "sales.xlsx",
        &[simple_sheet("Sales/Q1*"), simple_sheet("  Report  ")],
    );
    ws.add_workbook("inventory.xlsx", &[simple_sheet("Stock")]);

    let summary = run(&ws);

    assert_eq!(summary.workbooks_succeeded(), 2);
    assert_eq!(summary.sheets_exported(), 3);
    assert!(ws.output("sales/SalesQ1.csv").is_file());
    assert!(ws.output("sales/Report.csv").is_file());
    assert!(ws.output("inventory/Stock.csv").is_file());
    assert_eq!(
        ws.root_entries(),
        vec!["dataset", "inventory", "sales"]
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let ws = Workspace::new();
    ws.add_workbook(
        "book.xlsx",
        &[
            simple_sheet("First"),
            FixtureSheet::new(
                "Second",
                vec![
                    vec![text("name"), text("note")],
                    vec![text("x"), text("has, comma")],
                ],
            ),
        ],
    );

    run(&ws);
    let first = (read(&ws, "book/First.csv"), read(&ws, "book/Second.csv"));
    run(&ws);
    let second = (read(&ws, "book/First.csv"), read(&ws, "book/Second.csv"));

    assert_eq!(first, second);
}

#[test]
fn test_corrupt_workbook_does_not_stop_others() {
    let ws = Workspace::new();
    ws.add_file("a_broken.xlsx", b"this is not a zip archive");
    ws.add_workbook("b_good.xlsx", &[simple_sheet("Data")]);

    let summary = run(&ws);

    assert_eq!(summary.workbooks_found(), 2);
    assert_eq!(summary.workbooks_failed(), 1);
    assert_eq!(summary.workbooks_succeeded(), 1);

    let failures: Vec<_> = summary.failures().collect();
    assert_eq!(failures[0].0.file_name(), "a_broken.xlsx");
    assert_eq!(failures[0].1.error_type, ExportErrorType::Open);

    assert_eq!(read(&ws, "b_good/Data.csv"), "a,b\n1,2\n3,4\n");
}

#[test]
fn test_missing_dataset_creates_nothing() {
    let ws = Workspace::new();
    fs::remove_dir(&ws.dataset).unwrap();
    let before = ws.root_entries();

    let summary = run(&ws);

    assert_eq!(summary.status, RunStatus::DatasetMissing);
    assert_eq!(summary.workbooks_found(), 0);
    assert_eq!(ws.root_entries(), before);
}

#[test]
fn test_empty_dataset_creates_nothing() {
    let ws = Workspace::new();
    ws.add_file("readme.txt", b"no workbooks here");

    let summary = run(&ws);

    assert_eq!(summary.status, RunStatus::NoWorkbooks);
    assert_eq!(ws.root_entries(), vec!["dataset"]);
}

#[test]
fn test_existing_files_are_overwritten_and_others_kept() {
    let ws = Workspace::new();
    ws.add_workbook("book.xlsx", &[simple_sheet("Data")]);
    let out = ws.output("book");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("Data.csv"), "stale\n").unwrap();
    fs::write(out.join("Removed.csv"), "from an older run\n").unwrap();

    run(&ws);

    assert_eq!(read(&ws, "book/Data.csv"), "a,b\n1,2\n3,4\n");
    assert_eq!(read(&ws, "book/Removed.csv"), "from an older run\n");
}

#[test]
fn test_cell_rendering_through_real_workbook() {
    let ws = Workspace::new();
    ws.add_workbook(
        "mixed.xlsx",
        &[FixtureSheet::new(
            "Mixed",
            vec![
                vec![text("text"), Cell::Empty, text("flag"), text("value")],
                vec![
                    text("say \"hi\""),
                    Cell::Empty,
                    Cell::Bool(true),
                    num(2.5),
                ],
                vec![text("a,b"), text("x"), Cell::Bool(false), num(10.0)],
            ],
        )],
    );

    run(&ws);

    assert_eq!(
        read(&ws, "mixed/Mixed.csv"),
        "text,Unnamed: 1,flag,value\n\"say \"\"hi\"\"\",,True,2.5\n\"a,b\",x,False,10\n"
    );
}

#[test]
fn test_leading_empty_column_is_kept() {
    let ws = Workspace::new();
    ws.add_workbook(
        "offset.xlsx",
        &[FixtureSheet::new(
            "Data",
            vec![
                vec![Cell::Empty, text("a"), text("b")],
                vec![Cell::Empty, num(1.0), num(2.0)],
            ],
        )],
    );

    run(&ws);

    assert_eq!(read(&ws, "offset/Data.csv"), "Unnamed: 0,a,b\n,1,2\n");
}

#[test]
fn test_duplicate_headers_through_real_workbook() {
    let ws = Workspace::new();
    ws.add_workbook(
        "dupes.xlsx",
        &[FixtureSheet::new(
            "Data",
            vec![vec![text("a"), text("a")], vec![num(1.0), num(2.0)]],
        )],
    );

    run(&ws);

    assert_eq!(read(&ws, "dupes/Data.csv"), "a,a.1\n1,2\n");
}

#[test]
fn test_colliding_sheet_names_keep_last() {
    let ws = Workspace::new();
    ws.add_workbook(
        "book.xlsx",
        &[
            FixtureSheet::new("Q1/2024", vec![vec![text("first")]]),
            FixtureSheet::new("Q12024", vec![vec![text("second")]]),
        ],
    );

    let summary = run(&ws);

    let sheets = &summary.outcomes[0].sheets;
    assert_eq!(sheets.len(), 2);
    assert!(!sheets[0].overwrote_earlier);
    assert!(sheets[1].overwrote_earlier);
    assert_eq!(read(&ws, "book/Q12024.csv"), "second\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = Workspace::new();
    ws.add_workbook("book.xlsx", &[simple_sheet("Data"), simple_sheet("More")]);

    let summary = Exporter::xlsx(ExportOptions { dry_run: true }).export(&ws.dataset);

    assert!(summary.dry_run);
    assert_eq!(summary.sheets_exported(), 2);
    assert_eq!(summary.outcomes[0].sheets[0].rows, 2);
    assert_eq!(summary.outcomes[0].sheets[0].columns, 2);
    assert_eq!(ws.root_entries(), vec!["dataset"]);
}

#[test]
fn test_convenience_export_function() {
    let ws = Workspace::new();
    ws.add_workbook("book.xlsx", &[simple_sheet("Data")]);

    let summary = sheetcsv::core::export::export(&ws.dataset);

    assert!(summary.is_successful());
    assert!(ws.output("book/Data.csv").is_file());
}
