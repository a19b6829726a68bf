use crate::error::CoreError;
use serde::Serialize;
use std::fmt;

pub const MAX_ID_NUMBER: u16 = 999;

/// Normalized pet-record code: one uppercase letter plus a number with no
/// leading zeros, so "a007" scans to `A7`. Ordering is letter first, then
/// numeric, which puts `A2` before `A10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PetId {
    letter: char,
    number: u16,
}

impl PetId {
    pub fn new(letter: char, number: u16) -> Result<Self, CoreError> {
        if !letter.is_ascii_alphabetic() {
            return Err(CoreError::InvalidIdLetter(letter));
        }
        if number > MAX_ID_NUMBER {
            return Err(CoreError::IdNumberOutOfRange(u32::from(number)));
        }
        Ok(Self {
            letter: letter.to_ascii_uppercase(),
            number,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

impl Serialize for PetId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First "letter followed by 1-3 digits" occurrence in `text`, scanning
/// left to right; digits are taken greedily, at most three.
pub fn scan_pet_id(text: &str) -> Option<PetId> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_alphabetic() {
            continue;
        }
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && end - start < 3 && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == start {
            continue;
        }
        let number = text[start..end].parse().ok()?;
        return PetId::new(b as char, number).ok();
    }
    None
}

/// Scans fields in order; the first field containing an id wins.
pub fn find_pet_id<S: AsRef<str>>(fields: &[S]) -> Option<PetId> {
    fields.iter().find_map(|field| scan_pet_id(field.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::{find_pet_id, scan_pet_id, PetId};

    #[test]
    fn scan_uppercases_and_strips_leading_zeros() {
        let id = scan_pet_id("a007").unwrap();
        assert_eq!(id.to_string(), "A7");
    }

    #[test]
    fn scan_takes_at_most_three_digits() {
        let id = scan_pet_id("B12345").unwrap();
        assert_eq!(id.to_string(), "B123");
    }

    #[test]
    fn scan_finds_id_inside_text() {
        let id = scan_pet_id("Rex b41 groomed").unwrap();
        assert_eq!(id.to_string(), "B41");
    }

    #[test]
    fn scan_requires_digit_after_letter() {
        assert!(scan_pet_id("Garden Landscaper").is_none());
        assert!(scan_pet_id("3/4/21").is_none());
    }

    #[test]
    fn scan_is_idempotent_on_canonical_form() {
        let id = scan_pet_id("c090").unwrap();
        let again = scan_pet_id(&id.to_string()).unwrap();
        assert_eq!(id, again);
    }

    #[test]
    fn all_zero_number_is_preserved() {
        let id = scan_pet_id("a0 ").unwrap();
        assert_eq!(id.to_string(), "A0");
    }

    #[test]
    fn ordering_is_letter_then_numeric() {
        let a2 = scan_pet_id("A2").unwrap();
        let a10 = scan_pet_id("A10").unwrap();
        let b1 = scan_pet_id("B1").unwrap();
        assert!(a2 < a10);
        assert!(a10 < b1);
    }

    #[test]
    fn find_pet_id_respects_field_order() {
        let fields = ["no digits here", "Bella a010", "B2"];
        let id = find_pet_id(&fields).unwrap();
        assert_eq!(id.to_string(), "A10");
    }

    #[test]
    fn new_rejects_out_of_range_number() {
        assert!(PetId::new('A', 1000).is_err());
        assert!(PetId::new('7', 1).is_err());
    }
}
