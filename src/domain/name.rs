use super::errors::WormError;

pub fn validate_worm_name(value: &str) -> Result<String, WormError> {
    const MIN_LEN: usize = 3;

    if value.chars().count() < MIN_LEN {
        return Err(WormError::InvalidName(value.to_string()));
    }
    if !value.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Err(WormError::InvalidName(value.to_string()));
    }

    // Letters, spaces and both quote styles, e.g. `James o'Hara "Jim"`.
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '"'))
    {
        return Err(WormError::InvalidName(value.to_string()));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_name_has_quotes_and_spaces_then_it_is_valid() {
        assert_eq!(
            validate_worm_name("James o'Hara \"Jim\""),
            Ok("James o'Hara \"Jim\"".to_string())
        );
    }

    #[test]
    fn when_name_length_is_two_then_returns_invalid_name() {
        assert!(matches!(
            validate_worm_name("Jo"),
            Err(WormError::InvalidName(_))
        ));
    }

    #[test]
    fn when_name_length_is_three_then_it_is_valid() {
        assert_eq!(validate_worm_name("Joe"), Ok("Joe".to_string()));
    }

    #[test]
    fn when_name_starts_lowercase_then_returns_invalid_name() {
        assert!(validate_worm_name("james").is_err());
    }

    #[test]
    fn when_name_starts_with_space_then_returns_invalid_name() {
        assert!(validate_worm_name(" James").is_err());
    }

    #[test]
    fn when_name_contains_digits_then_returns_invalid_name() {
        assert!(validate_worm_name("James2").is_err());
    }

    #[test]
    fn when_name_contains_non_ascii_letters_then_returns_invalid_name() {
        assert!(validate_worm_name("Jérôme").is_err());
    }

    #[test]
    fn when_name_is_empty_then_returns_invalid_name() {
        assert!(validate_worm_name("").is_err());
    }
}
