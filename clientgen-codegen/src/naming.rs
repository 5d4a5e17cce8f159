//! Casing utilities shared by type-name derivation rules.

/// Convert a string to PascalCase (e.g., "pet_status" -> "PetStatus").
///
/// Words split on underscores, hyphens, spaces, and camel-case boundaries
/// (acronym runs included, so "API_KEY" -> "ApiKey" and "APIKey" ->
/// "ApiKey"); each word is capitalized with the remainder lowercased.
pub fn to_pascal_case(s: &str) -> String {
    words(s)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // A word starts at a lower-to-upper transition and at the last
        // capital of an acronym run ("APIKey" -> "API", "Key").
        let boundary = !current.is_empty()
            && c.is_uppercase()
            && (chars[i - 1].is_lowercase()
                || chars[i - 1].is_ascii_digit()
                || chars.get(i + 1).is_some_and(|next| next.is_lowercase()));

        if boundary {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("pet_status"), "PetStatus");
        assert_eq!(to_pascal_case("pet-status"), "PetStatus");
        assert_eq!(to_pascal_case("petStatus"), "PetStatus");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_normalizes_uppercase_segments() {
        assert_eq!(to_pascal_case("API_KEY"), "ApiKey");
        assert_eq!(to_pascal_case("APIKey"), "ApiKey");
        assert_eq!(to_pascal_case("GET"), "Get");
        assert_eq!(to_pascal_case("DELETE"), "Delete");
    }
}
