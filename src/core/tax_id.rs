//! CPF and CNPJ identifiers with check-digit validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxIdError;

/// Digit count of a CPF (individual taxpayer).
pub const CPF_LEN: usize = 11;

/// Digit count of a CNPJ (legal entity).
pub const CNPJ_LEN: usize = 14;

/// Validate a CPF by structure and check digits.
///
/// Separators (dots, dashes, spaces, anything that is not an ASCII digit)
/// are ignored, so both "529.982.247-25" and "52998224725" are accepted.
/// Never panics; any non-conforming input yields `false`.
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(&digits_of(input)).is_ok()
}

/// Validate a CNPJ by structure and check digits.
///
/// Separators are ignored ("11.222.333/0001-81" == "11222333000181").
/// Never panics; any non-conforming input yields `false`.
pub fn validate_cnpj(input: &str) -> bool {
    check_cnpj(&digits_of(input)).is_ok()
}

fn digits_of(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over `digits`: weights run from `len + 1` down to 2,
/// `(sum * 10) mod 11` with 10 folding to 0.
fn cpf_check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        d => d as u8,
    }
}

/// CNPJ check digit over `digits`: the weight pointer starts at
/// `len - 7` and counts down, wrapping from 1 back to 9.
fn cnpj_check_digit(digits: &[u8]) -> u8 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

fn check_cpf(digits: &[u8]) -> Result<(), TaxIdError> {
    if digits.len() != CPF_LEN {
        return Err(TaxIdError::WrongLength {
            expected: CPF_LEN,
            found: digits.len(),
        });
    }
    if all_same(digits) {
        return Err(TaxIdError::RepeatedDigits);
    }
    if cpf_check_digit(&digits[..9]) != digits[9] || cpf_check_digit(&digits[..10]) != digits[10] {
        return Err(TaxIdError::CheckDigitMismatch);
    }
    Ok(())
}

fn check_cnpj(digits: &[u8]) -> Result<(), TaxIdError> {
    if digits.len() != CNPJ_LEN {
        return Err(TaxIdError::WrongLength {
            expected: CNPJ_LEN,
            found: digits.len(),
        });
    }
    if all_same(digits) {
        return Err(TaxIdError::RepeatedDigits);
    }
    if cnpj_check_digit(&digits[..12]) != digits[12]
        || cnpj_check_digit(&digits[..13]) != digits[13]
    {
        return Err(TaxIdError::CheckDigitMismatch);
    }
    Ok(())
}

fn to_digit_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// A validated CPF, stored as its 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a CPF, with or without the usual mask.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = digits_of(input);
        check_cpf(&digits)?;
        Ok(Self(to_digit_string(&digits)))
    }

    /// The 11 digits without separators.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}

impl FromStr for Cpf {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// A validated CNPJ, stored as its 14 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and validate a CNPJ, with or without the usual mask.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = digits_of(input);
        check_cnpj(&digits)?;
        Ok(Self(to_digit_string(&digits)))
    }

    /// The 14 digits without separators.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The 8-digit root identifying the company across its branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl FromStr for Cnpj {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

/// Either kind of Brazilian tax identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse a CPF or CNPJ, choosing the kind by digit count.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        match digits_of(input).len() {
            CPF_LEN => Cpf::parse(input).map(Self::Cpf),
            CNPJ_LEN => Cnpj::parse(input).map(Self::Cnpj),
            found => Err(TaxIdError::WrongLength {
                expected: if found <= CPF_LEN { CPF_LEN } else { CNPJ_LEN },
                found,
            }),
        }
    }

    /// The bare digits (11 for a CPF, 14 for a CNPJ).
    pub fn digits(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.digits(),
            Self::Cnpj(cnpj) => cnpj.digits(),
        }
    }

    /// Whether this is a CPF.
    pub fn is_cpf(&self) -> bool {
        matches!(self, Self::Cpf(_))
    }

    /// Whether this is a CNPJ.
    pub fn is_cnpj(&self) -> bool {
        matches!(self, Self::Cnpj(_))
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => cpf.fmt(f),
            Self::Cnpj(cnpj) => cnpj.fmt(f),
        }
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        match id {
            TaxId::Cpf(cpf) => cpf.into(),
            TaxId::Cnpj(cnpj) => cnpj.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- CPF ---

    #[test]
    fn cpf_known_valid() {
        assert!(validate_cpf("52998224725"));
    }

    #[test]
    fn cpf_with_mask() {
        assert!(validate_cpf("529.982.247-25"));
    }

    #[test]
    fn cpf_repeated_digits() {
        assert!(!validate_cpf("11111111111"));
        assert!(!validate_cpf("00000000000"));
    }

    #[test]
    fn cpf_too_short() {
        assert!(!validate_cpf("123"));
    }

    #[test]
    fn cpf_empty() {
        assert!(!validate_cpf(""));
    }

    #[test]
    fn cpf_first_check_digit_wrong() {
        assert!(!validate_cpf("52998224735"));
    }

    #[test]
    fn cpf_second_check_digit_wrong() {
        assert!(!validate_cpf("52998224726"));
    }

    #[test]
    fn cpf_check_digit_folds_ten_to_zero() {
        // 6 * 2 = 12, (12 * 10) % 11 == 10
        assert_eq!(cpf_check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 6]), 0);
    }

    #[test]
    fn cpf_parse_errors() {
        assert_eq!(
            Cpf::parse("123"),
            Err(TaxIdError::WrongLength {
                expected: 11,
                found: 3
            })
        );
        assert_eq!(Cpf::parse("22222222222"), Err(TaxIdError::RepeatedDigits));
        assert_eq!(
            Cpf::parse("52998224720"),
            Err(TaxIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn cpf_display_masked() {
        let cpf = Cpf::parse("52998224725").unwrap();
        assert_eq!(cpf.to_string(), "529.982.247-25");
        assert_eq!(cpf.digits(), "52998224725");
    }

    // --- CNPJ ---

    #[test]
    fn cnpj_known_valid() {
        assert!(validate_cnpj("11222333000181"));
    }

    #[test]
    fn cnpj_with_mask() {
        assert!(validate_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn cnpj_wrong_check_digit() {
        assert!(!validate_cnpj("11222333000180"));
    }

    #[test]
    fn cnpj_all_zeros() {
        assert!(!validate_cnpj("00000000000000"));
    }

    #[test]
    fn cnpj_weights_match_reference() {
        // 5,4,3,2,9,8,7,6,5,4,3,2 over 1,1,2,2,2,3,3,3,0,0,0,1 = 102 → 11 - 3 = 8
        assert_eq!(cnpj_check_digit(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), 8);
        // 6,5,4,3,2,9,8,7,6,5,4,3,2 over ...8 = 120 → 11 - 10 = 1
        assert_eq!(
            cnpj_check_digit(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8]),
            1
        );
    }

    #[test]
    fn cnpj_display_and_root() {
        let cnpj = Cnpj::parse("11222333000181").unwrap();
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
        assert_eq!(cnpj.root(), "11222333");
    }

    // --- TaxId ---

    #[test]
    fn tax_id_picks_kind_by_length() {
        assert!(TaxId::parse("529.982.247-25").unwrap().is_cpf());
        assert!(TaxId::parse("11.222.333/0001-81").unwrap().is_cnpj());
    }

    #[test]
    fn tax_id_rejects_other_lengths() {
        assert_eq!(
            TaxId::parse("1234567890123"),
            Err(TaxIdError::WrongLength {
                expected: 14,
                found: 13
            })
        );
    }

    #[test]
    fn serde_uses_bare_digits() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"11222333000181\"");
        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnpj);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<Cpf>("\"11111111111\"").is_err());
    }
}
