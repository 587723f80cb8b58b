use crate::core::HasLabels;
use std::collections::BTreeSet;

/// Collect the distinct class labels of a record stream in ascending order.
///
/// The stream is read once, front to back. Labels are compared with their
/// natural ordering, so numeric labels sort numerically and strings sort
/// lexicographically.
pub fn get_sorted_unique_class_labels<I, R, L>(stream: I) -> Vec<L>
where
    I: IntoIterator<Item = R>,
    R: HasLabels<Label = L>,
    L: Ord + Clone,
{
    let mut unique_labels = BTreeSet::new();
    let mut records_seen = 0usize;

    for record in stream {
        records_seen += 1;
        for label in record.labels() {
            if !unique_labels.contains(label) {
                unique_labels.insert(label.clone());
            }
        }
    }

    tracing::debug!(
        records = records_seen,
        unique_labels = unique_labels.len(),
        "collected class labels"
    );

    unique_labels.into_iter().collect()
}
