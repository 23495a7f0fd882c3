//! Core identifier types, field validation, and input masks.
//!
//! This module provides the Brazilian tax identifiers (CPF and CNPJ)
//! with check-digit validation, plus the field-level rules used by the
//! registration forms.

mod error;
mod fields;
pub mod mask;
mod tax_id;

pub use error::*;
pub use fields::*;
pub use mask::{
    format_brl, mask_cep, mask_cnpj, mask_cpf, mask_street_number, mask_uf, parse_brl_input,
};
pub use tax_id::*;
