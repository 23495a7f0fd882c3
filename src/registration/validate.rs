use super::draft::{Address, CompanyInfo};
use crate::core::{
    ValidationError, ValidationErrorKind, validate_cep, validate_cnpj, validate_cpf,
    validate_email, validate_street_number, validate_uf,
};

/// Validate the company step. Returns all validation errors found (not just the first).
///
/// Every field is required except the representative CPF, which is only
/// checked when present.
pub fn validate_company(company: &CompanyInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let required = [
        ("razaoSocial", &company.legal_name),
        ("nomeFantasia", &company.trade_name),
        ("email", &company.email),
        ("cnpj", &company.cnpj),
        ("naturezaJuridica", &company.legal_nature),
        ("representanteLegal", &company.legal_representative),
        ("celular", &company.phone),
        ("cargo", &company.role),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::missing(field));
        }
    }

    let email = company.email.trim();
    if !email.is_empty() && !validate_email(email) {
        errors.push(ValidationError::new(
            "email",
            ValidationErrorKind::InvalidEmail,
            format!("'{email}' is not a valid email address"),
        ));
    }

    let cnpj = company.cnpj.trim();
    if !cnpj.is_empty() && !validate_cnpj(cnpj) {
        errors.push(ValidationError::new(
            "cnpj",
            ValidationErrorKind::InvalidCnpj,
            format!("'{cnpj}' is not a valid CNPJ"),
        ));
    }

    if let Some(cpf) = company.representative_cpf.as_deref().map(str::trim) {
        if !cpf.is_empty() && !validate_cpf(cpf) {
            errors.push(ValidationError::new(
                "cpf",
                ValidationErrorKind::InvalidCpf,
                format!("'{cpf}' is not a valid CPF"),
            ));
        }
    }

    errors
}

/// Validate the address step. Returns all validation errors found.
///
/// The complement is optional; street, city and district are required.
pub fn validate_address(address: &Address) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !validate_cep(&address.postal_code) {
        errors.push(ValidationError::new(
            "cep",
            ValidationErrorKind::InvalidPostalCode,
            "CEP must have exactly 8 digits",
        ));
    }

    if !validate_uf(address.state.trim()) {
        errors.push(ValidationError::new(
            "uf",
            ValidationErrorKind::InvalidState,
            "state must be a two-letter code",
        ));
    }

    if !validate_street_number(address.number.trim()) {
        errors.push(ValidationError::new(
            "numero",
            ValidationErrorKind::InvalidNumber,
            "number must be 1-4 digits optionally followed by one letter",
        ));
    }

    let required = [
        ("logradouro", &address.street),
        ("cidade", &address.city),
        ("bairro", &address.district),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::missing(field));
        }
    }

    errors
}
