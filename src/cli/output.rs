//! Output formatting utilities

use crate::application::EntryView;
use crate::domain::{Entry, SavedEntry};

fn location_label(entry: &Entry) -> &str {
    if entry.address.is_empty() {
        "(no location)"
    } else {
        &entry.address
    }
}

fn photo_count(entry: &Entry) -> String {
    match entry.image_uris.len() {
        1 => "1 photo".to_string(),
        n => format!("{} photos", n),
    }
}

fn push_entry_line(output: &mut String, entry: &Entry, markers: &str, suffix: &str) {
    output.push_str(&format!(
        "{}  {}  {}  {} ({}){}\n",
        entry.id,
        entry.timestamp,
        markers,
        location_label(entry),
        photo_count(entry),
        suffix
    ));
    if let Some(description) = &entry.description {
        output.push_str(&format!("    {}\n", description));
    }
}

/// Format the home listing. Markers: ♥ liked, ★ saved.
pub fn format_entry_list(views: &[EntryView]) -> String {
    if views.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for view in views {
        let markers = format!(
            "{}{}",
            if view.liked { '♥' } else { ' ' },
            if view.saved { '★' } else { ' ' }
        );
        push_entry_line(&mut output, &view.entry, &markers, "");
    }
    output
}

/// Format the saved listing
pub fn format_saved_list(saved: &[&SavedEntry]) -> String {
    if saved.is_empty() {
        return "No saved entries".to_string();
    }

    let mut output = String::new();
    for item in saved {
        let suffix = format!("  saved {}", item.saved_at);
        push_entry_line(&mut output, &item.entry, "★", &suffix);
    }
    output
}

/// Format the liked listing
pub fn format_liked_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No liked entries".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        push_entry_line(&mut output, entry, "♥", "");
    }
    output
}
