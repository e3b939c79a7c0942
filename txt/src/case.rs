use crate::error::Result;
use crate::error::TxtError;

/// Uppercase the first character of `text`, leaving the rest as-is.
///
/// Empty input has no first character and is rejected with
/// [`TxtError::EmptyInput`]; see [`ucfirst_or_empty`] for the tolerant form.
pub fn ucfirst(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Err(TxtError::EmptyInput);
    };
    Ok(first.to_uppercase().chain(chars).collect())
}

/// Like [`ucfirst`], but maps empty input to an empty string.
pub fn ucfirst_or_empty(text: &str) -> String {
    ucfirst(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uppercases_only_the_first_char() {
        assert_eq!(ucfirst("abc").unwrap(), "Abc");
        assert_eq!(ucfirst("hELLO wORLD").unwrap(), "HELLO wORLD");
        assert_eq!(ucfirst("1abc").unwrap(), "1abc");
    }

    #[test]
    fn handles_multibyte_and_expanding_chars() {
        assert_eq!(ucfirst("élan").unwrap(), "Élan");
        assert_eq!(ucfirst("ßtraße").unwrap(), "SStraße");
    }

    #[test]
    fn empty_input_is_a_bounds_error() {
        assert!(matches!(ucfirst(""), Err(TxtError::EmptyInput)));
    }

    #[test]
    fn tolerant_variant_accepts_empty_input() {
        assert_eq!(ucfirst_or_empty(""), "");
        assert_eq!(ucfirst_or_empty("abc"), "Abc");
    }
}
