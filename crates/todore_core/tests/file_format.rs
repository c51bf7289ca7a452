use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todore_core::{load_tasks, save_tasks, FileError, Priority, Task, FILE_TOKEN};

#[test]
fn round_trip_preserves_fields_and_order() {
    let (_dir, path) = temp_tasks_path();
    let tasks = vec![
        task("Buy milk", Priority::Normal, when(2024, 1, 5, 9, 30, 0)),
        task("File taxes", Priority::Urgent, when(2031, 12, 31, 23, 59, 58)),
        task("Water plants", Priority::Lowest, when(2024, 2, 29, 0, 0, 1)),
    ];

    save_tasks(&tasks, &path).unwrap();
    let loaded = load_tasks(&path).unwrap();

    assert_eq!(loaded.len(), tasks.len());
    for (restored, saved) in loaded.iter().zip(&tasks) {
        assert_eq!(restored.description(), saved.description());
        assert_eq!(restored.priority, saved.priority);
        assert_eq!(restored.date_and_time, saved.date_and_time);
    }
    // Identity is not persisted; loaded tasks carry fresh ids.
    assert_ne!(loaded[0].id(), tasks[0].id());
}

#[test]
fn saving_the_same_sequence_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let tasks = vec![
        task("Buy milk", Priority::Normal, when(2024, 1, 5, 9, 30, 0)),
        task("File taxes", Priority::High, when(2024, 4, 15, 12, 0, 0)),
    ];

    save_tasks(&tasks, &first).unwrap();
    save_tasks(&tasks, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn single_task_file_has_eleven_known_lines() {
    let (_dir, path) = temp_tasks_path();
    let tasks = vec![task("Buy milk", Priority::Normal, when(2024, 1, 5, 9, 30, 0))];

    save_tasks(&tasks, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["ToDoRe_21", "1", "1", "Buy milk", "Normal", "2024", "1", "5", "9", "30", "0"]
    );
}

#[test]
fn empty_collection_saves_three_lines_and_loads_back_empty() {
    let (_dir, path) = temp_tasks_path();

    save_tasks(&[], &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![FILE_TOKEN, "1", "0"]);
    assert!(load_tasks(&path).unwrap().is_empty());
}

#[test]
fn unrecognized_token_is_rejected() {
    let (_dir, path) = temp_tasks_path();
    fs::write(&path, "NotATaskFile\n1\n0\n").unwrap();

    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::TokenMismatch { found } if found == "NotATaskFile"));
}

#[test]
fn unknown_or_non_numeric_version_is_rejected() {
    let (_dir, path) = temp_tasks_path();

    fs::write(&path, "ToDoRe_21\n2\n0\n").unwrap();
    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::VersionMismatch { found } if found == "2"));

    fs::write(&path, "ToDoRe_21\nabc\n0\n").unwrap();
    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::VersionMismatch { found } if found == "abc"));
}

#[test]
fn version_is_compared_by_numeric_value() {
    let (_dir, path) = temp_tasks_path();
    fs::write(&path, "ToDoRe_21\n1.0\n0\n").unwrap();

    assert!(load_tasks(&path).unwrap().is_empty());
}

#[test]
fn malformed_year_reports_its_line_number() {
    let (_dir, path) = temp_tasks_path();
    fs::write(
        &path,
        "ToDoRe_21\n1\n1\nBuy milk\nNormal\n20x4\n1\n5\n9\n30\n0\n",
    )
    .unwrap();

    let err = load_tasks(&path).unwrap_err();
    match err {
        FileError::Parse { line, message } => {
            assert_eq!(line, 6);
            assert!(message.contains("year"), "message: {message}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn unknown_priority_name_reports_its_line_number() {
    let (_dir, path) = temp_tasks_path();
    fs::write(
        &path,
        "ToDoRe_21\n1\n1\nBuy milk\nCritical\n2024\n1\n5\n9\n30\n0\n",
    )
    .unwrap();

    let err = load_tasks(&path).unwrap_err();
    match err {
        FileError::Parse { line, message } => {
            assert_eq!(line, 5);
            assert!(message.contains("Critical"), "message: {message}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn empty_description_line_reports_its_line_number() {
    let (_dir, path) = temp_tasks_path();
    fs::write(&path, "ToDoRe_21\n1\n1\n\nNormal\n2024\n1\n5\n9\n30\n0\n").unwrap();

    let err = load_tasks(&path).unwrap_err();
    match err {
        FileError::Parse { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains("empty"), "message: {message}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn negative_record_count_is_a_parse_error() {
    let (_dir, path) = temp_tasks_path();
    fs::write(&path, "ToDoRe_21\n1\n-3\n").unwrap();

    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::Parse { line: 3, .. }));
}

#[test]
fn huge_record_count_is_a_parse_error() {
    let (_dir, path) = temp_tasks_path();

    // A count whose byte total would overflow isize must not abort the
    // process; the record loop reports the missing lines instead.
    fs::write(&path, "ToDoRe_21\n1\n9999999999999999999\n").unwrap();
    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::Parse { line: 5, .. }));

    fs::write(&path, "ToDoRe_21\n1\n100000000000000\n").unwrap();
    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::Parse { line: 5, .. }));
}

#[test]
fn crlf_line_endings_and_utf8_bom_load_cleanly() {
    let (_dir, path) = temp_tasks_path();
    fs::write(
        &path,
        "\u{feff}ToDoRe_21\r\n1\r\n1\r\nBuy milk\r\nNormal\r\n2024\r\n1\r\n5\r\n9\r\n30\r\n0\r\n",
    )
    .unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description(), "Buy milk");
    assert_eq!(loaded[0].priority, Priority::Normal);
}

#[test]
fn integer_fields_tolerate_surrounding_whitespace() {
    let (_dir, path) = temp_tasks_path();
    fs::write(
        &path,
        "ToDoRe_21\n1\n 1 \nBuy milk\nNormal\n 2024\n1 \n 5 \n9\n30\n0\n",
    )
    .unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].date_and_time, when(2024, 1, 5, 9, 30, 0));
}

#[test]
fn priority_name_tolerates_surrounding_whitespace() {
    let (_dir, path) = temp_tasks_path();
    fs::write(
        &path,
        "ToDoRe_21\n1\n1\nBuy milk\n Normal \n2024\n1\n5\n9\n30\n0\n",
    )
    .unwrap();

    let loaded = load_tasks(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].priority, Priority::Normal);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = load_tasks(&path).unwrap_err();
    assert!(matches!(err, FileError::Io(_)));
}

fn temp_tasks_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Tasks.txt");
    (dir, path)
}

fn when(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn task(description: &str, priority: Priority, due: NaiveDateTime) -> Task {
    Task::new(description, due, priority).unwrap()
}
