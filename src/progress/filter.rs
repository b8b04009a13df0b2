use super::NormalizedProject;

/// Case-insensitive substring match on title, range and subtitle.
/// An empty (or whitespace-only) query matches everything.
pub fn matches(project: &NormalizedProject, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || project.haystack().contains(&query.to_lowercase())
}

/// Keep matching projects, preserving their relative order.
pub fn filter_projects<'a>(projects: &'a [NormalizedProject], query: &str) -> Vec<&'a NormalizedProject> {
    projects.iter().filter(|p| matches(p, query)).collect()
}
