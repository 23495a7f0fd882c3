use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Cnpj, Cpf, TaxIdError};

/// Nickname given to a CNPJ registered without one.
pub const DEFAULT_APELIDO: &str = "Sem Apelido";

/// Errors from [`CnpjBook`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TomadorError {
    #[error("CNPJ must not be empty")]
    Empty,

    #[error("invalid CNPJ '{value}': {source}")]
    InvalidCnpj { value: String, source: TaxIdError },

    #[error("CNPJ {0} is already registered")]
    AlreadyRegistered(Cnpj),

    #[error("CNPJ {0} not found")]
    NotFound(Cnpj),

    #[error("no CNPJ selected")]
    NothingSelected,
}

/// One registered CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnpjEntry {
    pub cnpj: Cnpj,
    pub apelido: String,
    pub created_at: DateTime<Utc>,
}

/// The CNPJs registered by one taker, keyed by the taker's CPF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnpjBook {
    owner: Cpf,
    entries: Vec<CnpjEntry>,
}

fn parse_cnpj(input: &str) -> Result<Cnpj, TomadorError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TomadorError::Empty);
    }
    Cnpj::parse(input).map_err(|source| TomadorError::InvalidCnpj {
        value: input.to_string(),
        source,
    })
}

fn apelido_or_default(apelido: &str) -> String {
    match apelido.trim() {
        "" => DEFAULT_APELIDO.to_string(),
        a => a.to_string(),
    }
}

impl CnpjBook {
    /// An empty book for the taker identified by `owner`.
    pub fn new(owner: Cpf) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// CPF of the taker that owns this book.
    pub fn owner(&self) -> &Cpf {
        &self.owner
    }

    /// Document-store path of this book's entries: `tomador/{cpf}/CNPJ`.
    pub fn collection_path(&self) -> String {
        format!("tomador/{}/CNPJ", self.owner.digits())
    }

    /// Register a CNPJ now. A blank apelido becomes [`DEFAULT_APELIDO`].
    pub fn add(&mut self, cnpj: &str, apelido: &str) -> Result<&CnpjEntry, TomadorError> {
        self.add_at(cnpj, apelido, Utc::now())
    }

    /// Register a CNPJ with an explicit creation time (e.g. when loading
    /// entries read back from storage).
    pub fn add_at(
        &mut self,
        cnpj: &str,
        apelido: &str,
        created_at: DateTime<Utc>,
    ) -> Result<&CnpjEntry, TomadorError> {
        let cnpj = parse_cnpj(cnpj)?;
        if self.position(&cnpj).is_some() {
            return Err(TomadorError::AlreadyRegistered(cnpj));
        }

        debug!(owner = %self.owner.digits(), cnpj = %cnpj.digits(), "CNPJ registered");
        self.entries.push(CnpjEntry {
            cnpj,
            apelido: apelido_or_default(apelido),
            created_at,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Change the apelido of a registered CNPJ.
    pub fn rename(&mut self, cnpj: &str, apelido: &str) -> Result<(), TomadorError> {
        let cnpj = parse_cnpj(cnpj)?;
        let idx = self
            .position(&cnpj)
            .ok_or(TomadorError::NotFound(cnpj))?;
        self.entries[idx].apelido = apelido_or_default(apelido);
        Ok(())
    }

    /// Remove a registered CNPJ and return its entry.
    pub fn remove(&mut self, cnpj: &str) -> Result<CnpjEntry, TomadorError> {
        let cnpj = parse_cnpj(cnpj)?;
        let idx = self
            .position(&cnpj)
            .ok_or(TomadorError::NotFound(cnpj))?;
        let entry = self.entries.remove(idx);
        debug!(owner = %self.owner.digits(), cnpj = %entry.cnpj.digits(), "CNPJ removed");
        Ok(entry)
    }

    /// Remove several CNPJs at once.
    ///
    /// All-or-nothing: if the selection is empty, or any CNPJ is invalid or
    /// not registered, nothing is removed.
    pub fn remove_many(&mut self, cnpjs: &[&str]) -> Result<Vec<CnpjEntry>, TomadorError> {
        if cnpjs.is_empty() {
            return Err(TomadorError::NothingSelected);
        }
        let mut selected = Vec::with_capacity(cnpjs.len());
        for input in cnpjs {
            let cnpj = parse_cnpj(input)?;
            if self.position(&cnpj).is_none() {
                return Err(TomadorError::NotFound(cnpj));
            }
            if !selected.contains(&cnpj) {
                selected.push(cnpj);
            }
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| selected.contains(&e.cnpj));
        self.entries = kept;
        debug!(owner = %self.owner.digits(), removed = removed.len(), "CNPJs removed");
        Ok(removed)
    }

    /// Look up an entry by CNPJ, masked or bare. Invalid input yields `None`.
    pub fn get(&self, cnpj: &str) -> Option<&CnpjEntry> {
        let cnpj = Cnpj::parse(cnpj).ok()?;
        self.position(&cnpj).map(|idx| &self.entries[idx])
    }

    /// Whether the CNPJ is registered.
    pub fn contains(&self, cnpj: &str) -> bool {
        self.get(cnpj).is_some()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CnpjEntry> {
        self.entries.iter()
    }

    /// Number of registered CNPJs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no CNPJ is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, cnpj: &Cnpj) -> Option<usize> {
        self.entries.iter().position(|e| &e.cnpj == cnpj)
    }
}
