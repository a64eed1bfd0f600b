//! Genre lists are stored as one comma-joined column
//!
//! Entries containing a comma are not escaped and split into two genres.

/// Split a stored genre column into its entries
///
/// Whitespace around each entry is trimmed and empty entries are dropped,
/// so an empty column yields an empty list.
pub fn split_genres(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join genre entries for storage
pub fn join_genres<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(|g| g.as_ref().trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empty() {
        assert_eq!(split_genres("Jazz, Reggae ,,Swing"), vec!["Jazz", "Reggae", "Swing"]);
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , ").is_empty());
    }

    #[test]
    fn test_join_then_split_is_stable() {
        let genres = vec!["Rock n Roll".to_string(), "Folk".to_string()];
        let stored = join_genres(&genres);
        assert_eq!(stored, "Rock n Roll,Folk");
        assert_eq!(split_genres(&stored), genres);
    }

    #[test]
    fn test_embedded_comma_is_not_escaped() {
        let stored = join_genres(&["Blues, Soul"]);
        assert_eq!(split_genres(&stored), vec!["Blues", "Soul"]);
    }
}
