//! CNPJ book of a service taker (tomador).
//!
//! An accounting client keeps, per taker CPF, the list of CNPJs it issues
//! invoices against, each with a short nickname (apelido).
//!
//! # Example
//!
//! ```
//! use cadastro::core::Cpf;
//! use cadastro::tomador::*;
//!
//! let owner = Cpf::parse("529.982.247-25").unwrap();
//! let mut book = CnpjBook::new(owner);
//! book.add("11.222.333/0001-81", "").unwrap();
//! assert_eq!(book.iter().next().unwrap().apelido, DEFAULT_APELIDO);
//! assert_eq!(book.collection_path(), "tomador/52998224725/CNPJ");
//! ```

mod book;

pub use book::{CnpjBook, CnpjEntry, DEFAULT_APELIDO, TomadorError};
