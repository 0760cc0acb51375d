//! Document number cleaning

/// Punctuation allowed inside grouped CPF/CNPJ numbers
const DOCUMENT_SEPARATORS: [char; 3] = ['.', '-', '/'];

/// Strip document separators (`.`, `-`, `/`) and keep everything else in order
///
/// # Examples
///
/// ```
/// use mascara::anonymization::cleaner::clean_document;
///
/// assert_eq!(clean_document("123.456.789-09"), "12345678909");
/// assert_eq!(clean_document("11.222.333/0001-81"), "11222333000181");
/// assert_eq!(clean_document(""), "");
/// ```
pub fn clean_document(doc: &str) -> String {
    doc.chars()
        .filter(|c| !DOCUMENT_SEPARATORS.contains(c))
        .collect()
}

/// Keep only ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("123.456.789-09", "12345678909" ; "grouped cpf")]
    #[test_case("12345678909", "12345678909" ; "plain cpf")]
    #[test_case("11.222.333/0001-81", "11222333000181" ; "grouped cnpj")]
    #[test_case("a.b-c/d", "abcd" ; "non digits are kept")]
    #[test_case("./-", "" ; "only separators")]
    #[test_case("", "" ; "empty")]
    fn test_clean_document(input: &str, expected: &str) {
        assert_eq!(clean_document(input), expected);
    }

    #[test]
    fn test_clean_document_keeps_spaces() {
        assert_eq!(clean_document("123 456"), "123 456");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(11) 91234-5678"), "11912345678");
        assert_eq!(digits_only("tel"), "");
    }
}
