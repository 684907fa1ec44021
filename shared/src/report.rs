//! Plain-text reports printed by the inspection scripts.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::image::ImageSource;
use crate::models::{Event, EventSummary};

/// Number of events per department, sorted by department name.
///
/// Events without a department are counted under `(none)`.
pub fn count_by_department(events: &[EventSummary]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        let department = event.department.trim();
        let key = if department.is_empty() { "(none)" } else { department };
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Number of events per image classification.
pub fn count_by_image_source(events: &[EventSummary]) -> BTreeMap<ImageSource, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts
            .entry(ImageSource::classify(event.image.as_deref()))
            .or_insert(0) += 1;
    }
    counts
}

/// One line per event plus department totals.
pub fn render_event_list(events: &[EventSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📋 Found {} events\n", events.len());

    for (i, event) in events.iter().enumerate() {
        let source = ImageSource::classify(event.image.as_deref());
        let status = if event.is_active { "active" } else { "inactive" };
        let _ = writeln!(
            out,
            "{:>3}. {} [{}] ({}) {} {}",
            i + 1,
            event.name,
            display_department(&event.department),
            status,
            source.marker(),
            source.label()
        );
    }

    let _ = writeln!(out, "\n📊 Events by department:");
    for (department, count) in count_by_department(events) {
        let _ = writeln!(out, "   {}: {}", department, count);
    }
    out
}

/// Full field dump of a single event.
pub fn render_event_detail(event: &Event) -> String {
    let mut out = String::new();
    let source = ImageSource::classify(event.image.as_deref());

    let _ = writeln!(out, "📌 {}", event.name);
    if let Some(id) = &event.id {
        let _ = writeln!(out, "   ID: {}", id);
    }
    let _ = writeln!(out, "   Department: {}", display_department(&event.department));
    let _ = writeln!(out, "   Active: {}", if event.is_active { "yes" } else { "no" });
    let _ = writeln!(out, "   Registration fee: {}", format_amount(event.registration_fee));
    let _ = writeln!(
        out,
        "   Image: {} {} {}",
        source.marker(),
        source.label(),
        event.image.as_deref().unwrap_or_default()
    );

    if event.registration_categories.is_empty() {
        let _ = writeln!(out, "   Categories: none");
    } else {
        let _ = writeln!(out, "   Categories ({}):", event.registration_categories.len());
        for category in &event.registration_categories {
            let _ = writeln!(out, "   • {}", category.category_name);
            let _ = writeln!(out, "       Fee: {}", format_amount(category.fee));
            let _ = writeln!(out, "       Prize: {}", or_dash(&category.prize));
            let _ = writeln!(out, "       Description: {}", or_dash(&category.description));
        }
    }

    if !event.fee_invariant_holds() {
        let _ = writeln!(
            out,
            "   ⚠️  Base fee is {} but per-category fees are defined",
            format_amount(event.registration_fee)
        );
    }
    out
}

/// Image classification per event plus totals.
pub fn render_image_report(events: &[EventSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🖼️  Image references for {} active events\n", events.len());

    for event in events {
        let source = ImageSource::classify(event.image.as_deref());
        let _ = writeln!(out, "{} {}", source.marker(), event.name);
        let _ = writeln!(
            out,
            "   {}: {}",
            source.label(),
            event.image.as_deref().filter(|i| !i.trim().is_empty()).unwrap_or("-")
        );
    }

    let _ = writeln!(out, "\n📊 Summary:");
    for (source, count) in count_by_image_source(events) {
        let _ = writeln!(out, "   {}: {}", source.label(), count);
    }
    out
}

/// Confirmation printed after a category update.
pub fn render_category_update(event: &Event) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✅ Updated registration categories for \"{}\"", event.name);
    let _ = writeln!(out, "   Base registration fee: {}", format_amount(event.registration_fee));
    for category in &event.registration_categories {
        let _ = writeln!(
            out,
            "   • {}: fee {}, prize {}",
            category.category_name,
            format_amount(category.fee),
            or_dash(&category.prize)
        );
    }
    out
}

/// Format a fee without a trailing `.0` for whole amounts.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{:.2}", amount)
    }
}

fn display_department(department: &str) -> &str {
    or_dash(department)
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
