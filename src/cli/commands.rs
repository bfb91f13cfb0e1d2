//! CLI Command Implementations
//!
//! Each command loads the store from the snapshot file, applies one
//! intent, and prints the resulting state.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::error::RosterError;
use crate::roster::{RosterStore, Student, StudentDraft};
use crate::storage::JsonFileStore;

fn open_store(file: &Path) -> RosterStore<JsonFileStore> {
    RosterStore::initialize(JsonFileStore::new(file))
}

/// List the roster, applying search text and class filter when given.
pub fn list(file: &Path, search: Option<String>, class: Option<String>) -> Result<()> {
    info!("listing roster from {}", file.display());

    let mut store = open_store(file);
    if let Some(text) = search {
        store.set_search_query(text);
    }
    store.set_class_filter(class);

    let matches: Vec<&Student> = store.filtered().collect();
    print_table(matches.iter().copied());
    println!("{} of {} students", matches.len(), store.students().len());

    Ok(())
}

/// Add a new student from the given field values.
pub fn add(file: &Path, name: String, class: String, age: String) -> Result<()> {
    info!("adding student to {}", file.display());

    let mut store = open_store(file);
    let student = store.add(&StudentDraft::new(name, class, age))?;

    println!("Added student {} ({})", student.id, student.name);
    print_table(store.students());

    Ok(())
}

/// Edit an existing student. Omitted fields keep their current value.
pub fn edit(
    file: &Path,
    id: u32,
    name: Option<String>,
    class: Option<String>,
    age: Option<String>,
) -> Result<()> {
    info!("editing student {id} in {}", file.display());

    let mut store = open_store(file);
    let current = store
        .get(id)
        .ok_or(RosterError::StudentNotFound { id })?;
    let draft = StudentDraft::new(
        name.unwrap_or_else(|| current.name.clone()),
        class.unwrap_or_else(|| current.class.clone()),
        age.unwrap_or_else(|| current.age.to_string()),
    );

    let student = store.update(id, &draft)?;
    println!("Updated student {} ({})", student.id, student.name);
    print_table(store.students());

    Ok(())
}

/// Delete a student after confirming with the user.
pub fn delete(file: &Path, id: u32, yes: bool) -> Result<()> {
    info!("deleting student {id} from {}", file.display());

    let mut store = open_store(file);
    let name = match store.get(id) {
        Some(student) => student.name.clone(),
        None => return Err(RosterError::StudentNotFound { id }.into()),
    };

    if !yes && !confirm(&format!("Delete student {id} ({name})?"))? {
        println!("Aborted.");
        return Ok(());
    }

    store.remove(id)?;
    println!("Deleted student {id} ({name})");
    print_table(store.students());

    Ok(())
}

/// Show the distinct class labels.
pub fn classes(file: &Path) -> Result<()> {
    info!("listing classes from {}", file.display());

    let store = open_store(file);
    let classes = store.distinct_classes();
    if classes.is_empty() {
        println!("No classes in the roster.");
        return Ok(());
    }
    for class in classes {
        println!("{class}");
    }

    Ok(())
}

/// Restore the sample roster after confirming with the user.
pub fn reset(file: &Path, yes: bool) -> Result<()> {
    info!("resetting roster in {}", file.display());

    let mut store = open_store(file);
    if !yes && !confirm("Discard all changes and restore the sample roster?")? {
        println!("Aborted.");
        return Ok(());
    }

    store.reset();
    println!("Roster reset.");
    print_table(store.students());

    Ok(())
}

/// Ask a yes/no question on stdin. Anything but an explicit yes is no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_table<'a>(rows: impl IntoIterator<Item = &'a Student>) {
    println!("{:<5} {:<24} {:<8} {:<4}", "ID", "NAME", "CLASS", "AGE");
    for student in rows {
        println!(
            "{:<5} {:<24} {:<8} {:<4}",
            student.id, student.name, student.class, student.age
        );
    }
}
