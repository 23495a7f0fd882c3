//! Keystroke masks for form inputs and pt-BR display formatting.
//!
//! Masks are progressive: they are applied to whatever the user has typed
//! so far and only emit the separators the input has already reached.

use rust_decimal::{Decimal, RoundingStrategy};

const CNPJ_GROUPS: &[usize] = &[2, 3, 3, 4, 2];
const CNPJ_SEPARATORS: &[char] = &['.', '.', '/', '-'];

const CPF_GROUPS: &[usize] = &[3, 3, 3, 2];
const CPF_SEPARATORS: &[char] = &['.', '.', '-'];

const CEP_GROUPS: &[usize] = &[5, 3];
const CEP_SEPARATORS: &[char] = &['-'];

fn apply_mask(input: &str, groups: &[usize], separators: &[char]) -> String {
    let max: usize = groups.iter().sum();
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(max)
        .collect();

    let mut out = String::with_capacity(max + separators.len());
    let mut start = 0;
    for (i, &len) in groups.iter().enumerate() {
        if start >= digits.len() {
            break;
        }
        if i > 0 {
            out.push(separators[i - 1]);
        }
        let end = (start + len).min(digits.len());
        out.extend(&digits[start..end]);
        start = end;
    }
    out
}

/// Mask a CNPJ as `NN.NNN.NNN/NNNN-NN`; extra digits beyond 14 are dropped.
pub fn mask_cnpj(input: &str) -> String {
    apply_mask(input, CNPJ_GROUPS, CNPJ_SEPARATORS)
}

/// Mask a CPF as `NNN.NNN.NNN-NN`; extra digits beyond 11 are dropped.
pub fn mask_cpf(input: &str) -> String {
    apply_mask(input, CPF_GROUPS, CPF_SEPARATORS)
}

/// Mask a CEP as `NNNNN-NNN`; extra digits beyond 8 are dropped.
pub fn mask_cep(input: &str) -> String {
    apply_mask(input, CEP_GROUPS, CEP_SEPARATORS)
}

/// Keep only letters, at most two, uppercased.
pub fn mask_uf(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(2)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Accept a partially typed street number (`0–4 digits` + optional letter).
///
/// Returns the uppercased value, or `None` when the keystroke should be
/// rejected and the previous value kept.
pub fn mask_street_number(input: &str) -> Option<String> {
    let digits = input.chars().take_while(|c| c.is_ascii_digit()).count();
    let rest = &input[digits..];
    let suffix_ok =
        rest.is_empty() || (rest.len() == 1 && rest.as_bytes()[0].is_ascii_alphabetic());
    (digits <= 4 && suffix_ok).then(|| input.to_ascii_uppercase())
}

/// Interpret the digits typed into a currency field as cents.
///
/// `"123456"` and `"R$ 1.234,56"` both yield `1234.56`. Returns `None` when
/// no digits were typed or the amount does not fit a `Decimal`.
pub fn parse_brl_input(input: &str) -> Option<Decimal> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let mut amount: Decimal = digits.parse().ok()?;
    amount.set_scale(2).ok()?;
    Some(amount)
}

/// Format an amount as Brazilian reais: `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{sign}R$ {grouped},{frac}")
}
