use super::DiscoveredFile;

/// Orders files newest first. Files with equal timestamps keep their
/// discovery order.
pub fn sort_by_recency_desc(mut files: Vec<DiscoveredFile>) -> Vec<DiscoveredFile> {
    files.sort_by(|a, b| b.last_modified().cmp(&a.last_modified()));
    files
}
