use std::path::{Path, PathBuf};

use chrono::DateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use steamvdf_codec::{PartialDocument, Record};
use steamvdf_shortcuts::grid::AddOutcome;
use steamvdf_shortcuts::{Shortcut, UpdateOutcome};

use steamvdf_cli::commands::UserEntry;

pub fn print_shortcuts(shortcuts: &[Shortcut]) {
    if shortcuts.is_empty() {
        println!("No shortcuts.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Exe"),
        header_cell("Start dir"),
        header_cell("Flags"),
        header_cell("Last played"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for shortcut in shortcuts {
        table.add_row(vec![
            Cell::new(shortcut.id),
            Cell::new(&shortcut.app_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&shortcut.exe_path),
            Cell::new(&shortcut.start_dir),
            flags_cell(shortcut),
            last_played_cell(shortcut.last_play_time),
            tags_cell(&shortcut.tags),
        ]);
    }
    println!("{table}");
}

pub fn print_shortcuts_json(shortcuts: &[Shortcut]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(shortcuts)?);
    Ok(())
}

pub fn print_dump(partial: &PartialDocument) {
    let document = &partial.document;
    println!(
        "Document: {} ({}, {} records)",
        document.name(),
        document.version(),
        document.len()
    );
    for (index, record) in document.records().iter().enumerate() {
        print_record(index, record);
    }
    if let Some(failure) = &partial.failure {
        eprintln!("Record {} failed: {}", failure.index, failure.error);
        if !failure.partial.is_empty() {
            eprintln!("Fields read before the failure:");
            for field in failure.partial.iter() {
                eprintln!("  {field}");
            }
        }
    }
}

fn print_record(index: usize, record: &Record) {
    println!();
    println!("[{index}]");
    for field in record.iter() {
        println!("  {field}");
    }
}

pub fn print_update(outcome: UpdateOutcome) {
    println!("{outcome}");
}

pub fn print_users(users: &[UserEntry]) {
    if users.is_empty() {
        println!("No Steam users found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("User"),
        header_cell("shortcuts.vdf"),
        header_cell("Grid"),
    ]);
    apply_table_style(&mut table);
    for user in users {
        let shortcuts = if user.shortcuts_exists {
            Cell::new(user.shortcuts_file.display())
        } else {
            dim_cell(format!("{} (missing)", user.shortcuts_file.display()))
        };
        let grid = match &user.grid_dir {
            Some(dir) => Cell::new(dir.display()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&user.user_id).add_attribute(Attribute::Bold),
            shortcuts,
            grid,
        ]);
    }
    println!("{table}");
}

pub fn print_installed(data_dir: Option<&Path>) {
    match data_dir {
        Some(dir) => println!("Steam is installed: {}", dir.display()),
        None => println!("Steam is not installed"),
    }
}

pub fn print_grid_add(outcome: &AddOutcome) {
    match outcome {
        AddOutcome::Copied(path) => println!("Copied image to {}", path.display()),
        AddOutcome::AlreadyPresent(path) => println!(
            "Image already present at {} (use --overwrite to replace)",
            path.display()
        ),
    }
}

pub fn print_grid_remove(removed: &[PathBuf]) {
    if removed.is_empty() {
        println!("No images removed.");
        return;
    }
    for path in removed {
        println!("Removed {}", path.display());
    }
}

fn flags_cell(shortcut: &Shortcut) -> Cell {
    let flags: Vec<&str> = [
        (shortcut.is_hidden, "hidden"),
        (shortcut.allow_desktop_config, "desktop-config"),
        (shortcut.allow_overlay, "overlay"),
        (shortcut.is_open_vr, "vr"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();
    if flags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(flags.join(" "))
    }
}

fn last_played_cell(timestamp: i32) -> Cell {
    if timestamp == 0 {
        return dim_cell("-");
    }
    match DateTime::from_timestamp(i64::from(timestamp), 0) {
        Some(time) => Cell::new(time.format("%Y-%m-%d %H:%M")),
        None => dim_cell(timestamp),
    }
}

fn tags_cell(tags: &[String]) -> Cell {
    if tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(tags.join(", ")).fg(Color::Yellow)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
