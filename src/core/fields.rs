/// The 27 Brazilian federative units (26 states plus the Federal District).
pub const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Check whether an email has the `local@domain.tld` shape.
///
/// This is a shape check only: exactly one `@`, no whitespace,
/// a non-empty local part, and a domain with a dot that has at least
/// one character on each side.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a CEP (postal code): exactly 8 digits once separators are removed.
pub fn validate_cep(cep: &str) -> bool {
    cep.chars().filter(|c| c.is_ascii_digit()).count() == 8
}

/// Validate a UF (state code): exactly two ASCII letters, any case.
///
/// Membership in [`UFS`] is checked separately by [`is_known_uf`].
pub fn validate_uf(uf: &str) -> bool {
    uf.len() == 2 && uf.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check if a UF is one of the 27 federative units (case-insensitive).
pub fn is_known_uf(uf: &str) -> bool {
    UFS.iter().any(|known| known.eq_ignore_ascii_case(uf))
}

/// Validate a street number: 1–4 digits optionally followed by one letter
/// (e.g. "12", "1500", "12B").
pub fn validate_street_number(number: &str) -> bool {
    let digits = number.chars().take_while(|c| c.is_ascii_digit()).count();
    let rest = &number[digits..];
    (1..=4).contains(&digits)
        && (rest.is_empty() || (rest.len() == 1 && rest.chars().all(|c| c.is_ascii_alphabetic())))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- email ---

    #[test]
    fn email_valid() {
        assert!(validate_email("contato@empresa.com.br"));
        assert!(validate_email("a@b.c"));
    }

    #[test]
    fn email_missing_at() {
        assert!(!validate_email("contato.empresa.com"));
    }

    #[test]
    fn email_two_ats() {
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn email_no_tld() {
        assert!(!validate_email("contato@empresa"));
        assert!(!validate_email("contato@empresa."));
        assert!(!validate_email("contato@.com"));
    }

    #[test]
    fn email_whitespace() {
        assert!(!validate_email("conta to@empresa.com"));
        assert!(!validate_email(" contato@empresa.com"));
    }

    #[test]
    fn email_empty_local() {
        assert!(!validate_email("@empresa.com"));
    }

    // --- CEP ---

    #[test]
    fn cep_plain_and_masked() {
        assert!(validate_cep("01310100"));
        assert!(validate_cep("01310-100"));
    }

    #[test]
    fn cep_wrong_length() {
        assert!(!validate_cep("0131010"));
        assert!(!validate_cep("013101000"));
        assert!(!validate_cep(""));
    }

    #[test]
    fn cep_separators_ignored() {
        assert!(validate_cep("01.310-100"));
        assert!(!validate_cep("CEP"));
    }

    // --- UF ---

    #[test]
    fn uf_two_letters() {
        assert!(validate_uf("SP"));
        assert!(validate_uf("rj"));
        assert!(!validate_uf("S"));
        assert!(!validate_uf("SPA"));
        assert!(!validate_uf("S1"));
    }

    #[test]
    fn uf_known() {
        assert_eq!(UFS.len(), 27);
        assert!(is_known_uf("df"));
        assert!(!is_known_uf("XX"));
    }

    // --- street number ---

    #[test]
    fn street_number_shapes() {
        assert!(validate_street_number("1"));
        assert!(validate_street_number("1500"));
        assert!(validate_street_number("12B"));
        assert!(validate_street_number("12b"));
    }

    #[test]
    fn street_number_rejects() {
        assert!(!validate_street_number(""));
        assert!(!validate_street_number("B"));
        assert!(!validate_street_number("12345"));
        assert!(!validate_street_number("12BC"));
        assert!(!validate_street_number("12-"));
        assert!(!validate_street_number("12ç"));
    }
}
