//! Single-pass organization of the raw export: drop the header line, split
//! each row on commas, extract, dedup by id, sort.

use crate::domain::{Contact, PetId};
use crate::extract::extract_contact;
use serde::Serialize;
use std::collections::HashSet;

pub const OUTPUT_HEADER: &str = "Id,Name,Phone Number";

/// Counts of what the pass kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeSummary {
    pub rows_read: usize,
    pub contacts: usize,
    pub personal_skipped: usize,
    pub duplicates_dropped: usize,
}

#[derive(Debug, Clone)]
pub struct Organized {
    pub contacts: Vec<Contact>,
    pub summary: OrganizeSummary,
}

/// Runs the full pass over raw input lines.
///
/// The first line is always treated as a header and discarded. Rows are
/// split on commas with trailing empty fields preserved; quoted commas are
/// not a thing in this export and get no special handling. Duplicate ids
/// keep the first occurrence in input order.
pub fn organize<'a, I>(lines: I) -> Organized
where
    I: IntoIterator<Item = &'a str>,
{
    let mut contacts: Vec<Contact> = Vec::new();
    let mut seen: HashSet<PetId> = HashSet::new();
    let mut summary = OrganizeSummary::default();

    for line in lines.into_iter().skip(1) {
        summary.rows_read += 1;
        let fields: Vec<&str> = line.split(',').collect();
        let Some(contact) = extract_contact(&fields) else {
            summary.personal_skipped += 1;
            continue;
        };
        if !seen.insert(contact.id) {
            summary.duplicates_dropped += 1;
            continue;
        }
        contacts.push(contact);
    }

    contacts.sort_by_key(|contact| contact.id);
    summary.contacts = contacts.len();

    Organized { contacts, summary }
}

/// Renders the sorted contacts as the output CSV, header included.
pub fn render_csv(contacts: &[Contact]) -> String {
    let mut out = String::new();
    out.push_str(OUTPUT_HEADER);
    out.push('\n');
    for contact in contacts {
        out.push_str(&contact.to_csv_row());
        out.push('\n');
    }
    out
}
