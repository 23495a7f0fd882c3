use serde::{Deserialize, Serialize};

use super::store::Document;

/// Company data collected on the first registration step.
///
/// Serialized keys match the backend document schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Razão social (registered legal name).
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    /// Nome fantasia (trade name).
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    pub email: String,
    /// CNPJ as typed, masked or bare.
    pub cnpj: String,
    /// Natureza jurídica (legal nature, e.g. "Sociedade Limitada").
    #[serde(rename = "naturezaJuridica")]
    pub legal_nature: String,
    /// Representante legal (name of the legal representative).
    #[serde(rename = "representanteLegal")]
    pub legal_representative: String,
    /// Celular (mobile phone).
    #[serde(rename = "celular")]
    pub phone: String,
    /// Cargo (the representative's role in the company).
    #[serde(rename = "cargo")]
    pub role: String,
    /// CPF of the legal representative, if collected.
    #[serde(rename = "cpf", default, skip_serializing_if = "Option::is_none")]
    pub representative_cpf: Option<String>,
}

impl CompanyInfo {
    /// Copy with surrounding whitespace removed from every field.
    /// A blank representative CPF becomes `None`.
    pub fn normalized(&self) -> Self {
        Self {
            legal_name: self.legal_name.trim().to_string(),
            trade_name: self.trade_name.trim().to_string(),
            email: self.email.trim().to_string(),
            cnpj: self.cnpj.trim().to_string(),
            legal_nature: self.legal_nature.trim().to_string(),
            legal_representative: self.legal_representative.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.trim().to_string(),
            representative_cpf: self
                .representative_cpf
                .as_deref()
                .map(str::trim)
                .filter(|cpf| !cpf.is_empty())
                .map(str::to_string),
        }
    }
}

/// Postal address collected on the second registration step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Logradouro (street).
    #[serde(rename = "logradouro")]
    pub street: String,
    /// Número: 1–4 digits plus an optional letter.
    #[serde(rename = "numero")]
    pub number: String,
    /// Complemento (optional; may be empty).
    #[serde(rename = "complemento")]
    pub complement: String,
    /// CEP (postal code), 8 digits.
    #[serde(rename = "cep")]
    pub postal_code: String,
    /// UF (two-letter state code).
    #[serde(rename = "uf")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    /// Bairro (district).
    #[serde(rename = "bairro")]
    pub district: String,
}

impl Address {
    /// Copy with whitespace trimmed; state and number uppercased.
    pub fn normalized(&self) -> Self {
        Self {
            street: self.street.trim().to_string(),
            number: self.number.trim().to_ascii_uppercase(),
            complement: self.complement.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            state: self.state.trim().to_ascii_uppercase(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
        }
    }
}

/// Data accumulated across one registration session.
///
/// A plain value: every merge returns a new draft, and the whole thing can
/// be serialized to resume a session later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub company: Option<CompanyInfo>,
    pub address: Option<Address>,
    pub terms_accepted: bool,
}

impl RegistrationDraft {
    /// An empty draft: no step data, terms not accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the company data, keeping everything else.
    pub fn with_company(self, company: CompanyInfo) -> Self {
        Self {
            company: Some(company),
            ..self
        }
    }

    /// Replace the address, keeping everything else.
    pub fn with_address(self, address: Address) -> Self {
        Self {
            address: Some(address),
            ..self
        }
    }

    /// Set the terms-accepted flag.
    pub fn with_terms_accepted(self, accepted: bool) -> Self {
        Self {
            terms_accepted: accepted,
            ..self
        }
    }

    /// Whether nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.address.is_none() && !self.terms_accepted
    }
}

/// The single document written when a registration is confirmed.
///
/// Flat union of the company and address fields plus the `aceite`
/// (terms accepted) flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub company: CompanyInfo,
    #[serde(flatten)]
    pub address: Address,
    pub aceite: bool,
}

impl SubmissionPayload {
    /// Assemble the payload from a draft that has both steps filled in.
    pub fn from_draft(draft: &RegistrationDraft) -> Option<Self> {
        Some(Self {
            company: draft.company.clone()?,
            address: draft.address.clone()?,
            aceite: draft.terms_accepted,
        })
    }

    /// Encode as a document-store record.
    pub fn to_document(&self) -> Result<Document, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(serde::ser::Error::custom(
                "submission payload did not encode as an object",
            )),
        }
    }
}
