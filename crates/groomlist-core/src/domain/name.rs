//! Name cleanup for the messy export. The raw name block arrives with the
//! artifacts the export sprinkles in: stray double quotes, the pet id
//! repeated inside the text (sometimes zero-padded), empty parenthetical
//! groups, and padded runs of whitespace.
//!
//! Each step is a pure string-to-string function and the order is load
//! bearing: a later step may expose text a re-run of an earlier step would
//! have caught, and the observed output depends on not re-running it.

/// Marks the end of the name-bearing field run; the field containing it
/// and everything after are not part of the name.
pub const IMPORTED_MARKER: &str = "Imported on";

/// Applies the cleanup chain to a concatenated name block. `id` is the
/// canonical id text; every occurrence of it is removed verbatim before
/// the zero-padded variants are swept in a second, word-bounded pass.
pub fn clean_name(raw: &str, id: &str) -> String {
    let name = raw.replace(id, "");
    let name = name.trim().replace('"', "");
    let name = strip_whitespace_runs(name.trim());
    let name = strip_empty_parens(name.trim());
    let name = strip_id_words(name.trim());
    name.trim().to_string()
}

// Runs of two or more whitespace characters are dropped entirely, not
// collapsed to one; single whitespace characters survive.
fn strip_whitespace_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_len = 0usize;
    let mut run_ch = ' ';
    for ch in text.chars() {
        if ch.is_whitespace() {
            if run_len == 0 {
                run_ch = ch;
            }
            run_len += 1;
            continue;
        }
        if run_len == 1 {
            out.push(run_ch);
        }
        run_len = 0;
        out.push(ch);
    }
    if run_len == 1 {
        out.push(run_ch);
    }
    out
}

// Removes "(", any whitespace, ")" groups; the surrounding text is left
// untouched.
fn strip_empty_parens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '(' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j] == ')' {
                i = j + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

// Removes standalone words of the form letter + digits where at most three
// digits remain after leading zeros ("a07", "B003", "c12"). Word boundaries
// are required on both sides so ids fused into longer words stay put.
fn strip_id_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_alphabetic() && (i == 0 || !is_word_char(chars[i - 1])) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            let digits = &chars[i + 1..j];
            let bounded = j == chars.len() || !is_word_char(chars[j]);
            if !digits.is_empty() && bounded && significant_digits(digits) <= 3 {
                i = j;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn significant_digits(digits: &[char]) -> usize {
    digits.iter().skip_while(|&&ch| ch == '0').count()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::clean_name;

    #[test]
    fn removes_id_occurrences() {
        assert_eq!(clean_name("A7Rex", "A7"), "Rex");
    }

    #[test]
    fn removes_quotes() {
        assert_eq!(clean_name("Rex \"Rexy\" B2", "B2"), "Rex Rexy");
    }

    #[test]
    fn drops_whitespace_runs_entirely() {
        assert_eq!(clean_name("Rex  Jr", "B2"), "RexJr");
        assert_eq!(clean_name("Rex Jr", "B2"), "Rex Jr");
    }

    #[test]
    fn removes_empty_parens() {
        assert_eq!(clean_name("Bella ()", "A1"), "Bella");
        assert_eq!(clean_name("Bella (grey)", "A1"), "Bella (grey)");
    }

    #[test]
    fn removes_zero_padded_id_words() {
        assert_eq!(clean_name("Bella a007", "A7"), "Bella");
    }

    #[test]
    fn keeps_ids_fused_into_words() {
        // "A007" never stands alone here, and the verbatim pass only knows
        // the canonical "A7" spelling, so the fused form survives.
        assert_eq!(clean_name("A007John", "A7"), "A007John");
    }

    #[test]
    fn paren_removal_can_leave_a_double_space() {
        // The run stripper has already finished when the parens go, so the
        // two surviving single spaces end up adjacent. Observed behavior.
        assert_eq!(clean_name("John (   ) Smith", "A1"), "John  Smith");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_name("", "A1"), "");
    }
}
