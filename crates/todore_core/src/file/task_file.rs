//! Line-oriented task file reader and writer.
//!
//! # Responsibility
//! - Render an ordered task slice to the on-disk document and back.
//! - Own the priority wire-name table; renaming a Rust variant or a display
//!   label must not change the file format.
//!
//! # Invariants
//! - A document is `FILE_TOKEN`, the version line, a record count, then
//!   exactly eight lines per record; content past the declared records is
//!   ignored on load.
//! - Saving the same task sequence twice produces byte-identical files.
//! - Parse errors carry the 1-based line number of the offending line.

use super::{FileError, FileResult};
use crate::model::task::{Priority, Task};
use chrono::{Datelike, NaiveDate, Timelike};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// First line of every task file.
pub const FILE_TOKEN: &str = "ToDoRe_21";

/// Format version this build reads and writes. Written in its shortest
/// decimal form (`1`); load parses the line numerically and compares by
/// value, so `1.0` is accepted too.
pub const FILE_VERSION: f64 = 1.0;

const TASKS_FILE_NAME: &str = "Tasks.txt";

/// Wire name persisted for a priority.
pub fn priority_wire_name(priority: Priority) -> &'static str {
    match priority {
        Priority::Lowest => "Lowest",
        Priority::Low => "Low",
        Priority::Normal => "Normal",
        Priority::High => "High",
        Priority::Urgent => "Urgent",
    }
}

/// Priority for a persisted wire name.
pub fn priority_from_wire(value: &str) -> Option<Priority> {
    match value {
        "Lowest" => Some(Priority::Lowest),
        "Low" => Some(Priority::Low),
        "Normal" => Some(Priority::Normal),
        "High" => Some(Priority::High),
        "Urgent" => Some(Priority::Urgent),
        _ => None,
    }
}

/// Default persistence target: `Tasks.txt` next to the running executable,
/// or in the working directory when the executable path is unavailable.
pub fn default_tasks_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(TASKS_FILE_NAME)
}

/// Writes the whole task sequence to `path`.
///
/// The document is rendered in memory first, then written in one call, so a
/// write failure never leaves a half-rendered file from this process.
///
/// # Side effects
/// - Replaces the file at `path`.
/// - Emits `tasks_save` logging events with duration and status.
pub fn save_tasks(tasks: &[Task], path: impl AsRef<Path>) -> FileResult<()> {
    let started_at = Instant::now();
    info!("event=tasks_save module=file status=start tasks={}", tasks.len());

    let document = render_document(tasks);
    match fs::write(path, document) {
        Ok(()) => {
            info!(
                "event=tasks_save module=file status=ok tasks={} duration_ms={}",
                tasks.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=tasks_save module=file status=error duration_ms={} error_code=tasks_write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Reads the task sequence stored at `path`.
///
/// Returned tasks are freshly constructed and carry fresh ids; the format
/// does not persist identity.
///
/// # Side effects
/// - Emits `tasks_load` logging events with duration and status.
pub fn load_tasks(path: impl AsRef<Path>) -> FileResult<Vec<Task>> {
    let started_at = Instant::now();
    info!("event=tasks_load module=file status=start");

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(
                "event=tasks_load module=file status=error duration_ms={} error_code=tasks_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match parse_document(&text) {
        Ok(tasks) => {
            info!(
                "event=tasks_load module=file status=ok tasks={} duration_ms={}",
                tasks.len(),
                started_at.elapsed().as_millis()
            );
            Ok(tasks)
        }
        Err(err) => {
            error!(
                "event=tasks_load module=file status=error duration_ms={} error_code=tasks_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn render_document(tasks: &[Task]) -> String {
    let mut out = String::new();
    push_line(&mut out, FILE_TOKEN);
    push_line(&mut out, &FILE_VERSION.to_string());
    push_line(&mut out, &tasks.len().to_string());
    for task in tasks {
        let when = task.date_and_time;
        push_line(&mut out, task.description());
        push_line(&mut out, priority_wire_name(task.priority));
        push_line(&mut out, &when.year().to_string());
        push_line(&mut out, &when.month().to_string());
        push_line(&mut out, &when.day().to_string());
        push_line(&mut out, &when.hour().to_string());
        push_line(&mut out, &when.minute().to_string());
        push_line(&mut out, &when.second().to_string());
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn parse_document(text: &str) -> FileResult<Vec<Task>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = LineReader::new(text);

    let token = reader.next_line("file token")?;
    if token != FILE_TOKEN {
        return Err(FileError::TokenMismatch {
            found: token.to_string(),
        });
    }

    let version_raw = reader.next_line("format version")?;
    let version = f64::from_str(version_raw.trim()).map_err(|_| FileError::VersionMismatch {
        found: version_raw.trim().to_string(),
    })?;
    if version != FILE_VERSION {
        return Err(FileError::VersionMismatch {
            found: version_raw.trim().to_string(),
        });
    }

    let count: usize = int_field(&mut reader, "record count")?;
    // The declared count is untrusted input; cap the allocation hint by
    // what the document can actually hold.
    let mut tasks = Vec::with_capacity(count.min(reader.remaining() / 8));
    for _ in 0..count {
        tasks.push(parse_record(&mut reader)?);
    }

    // Content after the declared records is ignored.
    Ok(tasks)
}

fn parse_record(reader: &mut LineReader<'_>) -> FileResult<Task> {
    let description_line = reader.line_no();
    let description = reader.next_line("task description")?;

    let priority_line = reader.line_no();
    let priority_name = reader.next_line("task priority")?.trim();
    let priority = priority_from_wire(priority_name).ok_or_else(|| FileError::Parse {
        line: priority_line,
        message: format!("unknown priority name `{priority_name}`"),
    })?;

    let year: i32 = int_field(reader, "year")?;
    let month: u32 = int_field(reader, "month")?;
    let day_line = reader.line_no();
    let day: u32 = int_field(reader, "day")?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| FileError::Parse {
        line: day_line,
        message: format!("invalid calendar date {year:04}-{month:02}-{day:02}"),
    })?;

    let hour: u32 = int_field(reader, "hour")?;
    let minute: u32 = int_field(reader, "minute")?;
    let second_line = reader.line_no();
    let second: u32 = int_field(reader, "second")?;
    let date_and_time = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| FileError::Parse {
            line: second_line,
            message: format!("invalid time of day {hour:02}:{minute:02}:{second:02}"),
        })?;

    Task::new(description, date_and_time, priority).map_err(|err| FileError::Parse {
        line: description_line,
        message: err.to_string(),
    })
}

/// Reads one line and parses it as an integer. Surrounding whitespace is
/// tolerated; hand-edited files often carry it.
fn int_field<T: FromStr>(reader: &mut LineReader<'_>, what: &str) -> FileResult<T> {
    let line = reader.line_no();
    let raw = reader.next_line(what)?;
    raw.trim().parse::<T>().map_err(|_| FileError::Parse {
        line,
        message: format!("invalid {what} `{}`", raw.trim()),
    })
}

/// Sequential line access with 1-based numbering and `\r` tolerance, so
/// files written on Windows load cleanly.
struct LineReader<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, next: 0 }
    }

    /// 1-based number of the line about to be read.
    fn line_no(&self) -> usize {
        self.next + 1
    }

    /// Lines not yet consumed.
    fn remaining(&self) -> usize {
        self.lines.len() - self.next
    }

    fn next_line(&mut self, what: &str) -> FileResult<&'a str> {
        match self.lines.get(self.next) {
            Some(line) => {
                self.next += 1;
                Ok(line)
            }
            None => Err(FileError::Parse {
                line: self.next + 1,
                message: format!("unexpected end of file while reading {what}"),
            }),
        }
    }
}
