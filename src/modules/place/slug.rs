use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}]+").expect("Invalid slug separator regex"));

/// Derives the uniqueness key of a place from its name, city and state.
///
/// The parts are joined with hyphens and lowercased, every run of characters
/// that are not letters or digits collapses into a single hyphen, and
/// hyphens at either end are dropped.
pub fn derive(name: &str, city: &str, state: &str) -> String {
    let joined = format!("{}-{}-{}", name, city, state).to_lowercase();

    SEPARATORS
        .replace_all(&joined, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::derive;

    #[test]
    fn joins_and_lowercases_parts() {
        assert_eq!(derive("Place", "City", "State"), "place-city-state");
    }

    #[test]
    fn collapses_whitespace_and_punctuation() {
        assert_eq!(
            derive("St. John's   Church", "New  York", "N.Y."),
            "st-john-s-church-new-york-n-y"
        );
    }

    #[test]
    fn trims_separators_at_the_edges() {
        assert_eq!(derive("--Place!", "City", "(State)"), "place-city-state");
    }

    #[test]
    fn keeps_digits_and_non_ascii_letters() {
        assert_eq!(derive("Área 51", "São Paulo", "SP"), "área-51-são-paulo-sp");
    }

    #[test]
    fn same_inputs_give_same_slug() {
        assert_eq!(
            derive("Tower Bridge", "London", "England"),
            derive("tower   bridge", "LONDON", "england")
        );
    }

    #[test]
    fn punctuation_only_input_yields_empty_slug() {
        assert_eq!(derive("!!", "?", "..."), "");
    }
}
