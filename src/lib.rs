//! # cadastro
//!
//! Brazilian registration toolkit: CPF/CNPJ check-digit validation,
//! form field validators and input masks, and the three-step company
//! registration flow (company data → address → confirmation).
//!
//! Monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert!(validate_cnpj("11.222.333/0001-81"));
//! assert!(!validate_cnpj("11222333000180"));
//!
//! let cnpj = Cnpj::parse("11222333000181").unwrap();
//! assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ types and validators, field validators, masks, BRL formatting |
//! | `registration` (default) | Registration flow controller and `DocumentStore` capability |
//! | `tomador` (default) | Per-taker CNPJ book |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "registration")]
pub mod registration;

#[cfg(feature = "tomador")]
pub mod tomador;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
