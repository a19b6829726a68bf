//! Row extraction: one comma-split row in, one cleaned [`Contact`] out, or
//! `None` for rows carrying no pet id (personal contacts).

use crate::domain::name::{clean_name, IMPORTED_MARKER};
use crate::domain::pet_id::find_pet_id;
use crate::domain::phone::{find_phone, format_phone};
use crate::domain::Contact;

/// Extracts a contact from one raw row.
///
/// The id decides everything: a row without one is a personal contact and
/// is skipped. A missing name or phone never blocks extraction; the fields
/// default to empty.
pub fn extract_contact<S: AsRef<str>>(fields: &[S]) -> Option<Contact> {
    let id = find_pet_id(fields)?;
    let id_text = id.to_string();

    let mut block = String::new();
    for field in fields {
        let field = field.as_ref();
        if field.contains(IMPORTED_MARKER) {
            break;
        }
        block.push_str(field.trim());
    }
    let name = clean_name(&block, &id_text);

    let phone = match find_phone(fields) {
        Some(raw) => format_phone(&raw),
        None => String::new(),
    };

    Some(Contact { id, name, phone })
}
