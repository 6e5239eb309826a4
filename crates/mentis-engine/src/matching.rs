//! Substring policies for matching knowledge-base terms against free-text
//! medication names and history entries.
//!
//! Kept separate from the filtering loops so the policy can change without
//! touching them.

/// Case-insensitive "`haystack` contains `needle`". An empty needle matches
/// nothing.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a contraindication applies to a patient-record entry: either text
/// contains the other, case-insensitively.
///
/// `"MAOI use"` applies to a patient taking `"MAOI"`, and `"MAOI"` applies to
/// a patient taking `"Phenelzine (MAOI)"`.
pub fn contraindication_applies(contraindication: &str, record_entry: &str) -> bool {
    contains_ignore_case(record_entry, contraindication)
        || contains_ignore_case(contraindication, record_entry)
}
