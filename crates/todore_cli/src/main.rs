//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todore_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todore_core::Priority;

fn main() {
    // Why: keep a tiny smoke check to validate core crate wiring
    // independently from any desktop shell, without touching the task file.
    println!("todore_core version={}", todore_core::core_version());
    println!(
        "todore_core tasks_file={}",
        todore_core::default_tasks_path().display()
    );

    let labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    println!("todore_core priorities={}", labels.join(","));
}
