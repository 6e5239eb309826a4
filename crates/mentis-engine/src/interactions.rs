//! Pairwise medication interaction lookup.

use mentis_core::models::knowledge::MedicationReference;

use crate::matching::contains_ignore_case;

/// Human-readable descriptions of known interactions among `medications`.
///
/// Each pair `(i, j)` with `i < j` is checked once, and only in that
/// direction: a reference whose key appears in medication `i` is checked for
/// interactions appearing in medication `j`. `["lithium", "ibuprofen"]`
/// reports an interaction while `["ibuprofen", "lithium"]` does not unless
/// ibuprofen has its own reference entry.
pub fn check_interactions(
    medications: &[String],
    references: &[MedicationReference],
) -> Vec<String> {
    let mut found = Vec::new();

    for (i, first) in medications.iter().enumerate() {
        for second in &medications[i + 1..] {
            for reference in references {
                if !contains_ignore_case(first, &reference.key) {
                    continue;
                }
                if interacts_with(reference, second) {
                    found.push(format!("{first} + {second}: Potential interaction"));
                }
            }
        }
    }

    tracing::debug!(
        medications = medications.len(),
        interactions = found.len(),
        "interaction check complete"
    );
    found
}

/// Whether `medication` mentions any of the reference's known interactions.
pub fn interacts_with(reference: &MedicationReference, medication: &str) -> bool {
    reference
        .known_interactions
        .iter()
        .any(|term| contains_ignore_case(medication, term))
}
