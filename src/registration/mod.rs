//! Three-step company registration flow.
//!
//! Company data → address → confirmation. Each forward step is gated on
//! local validation; nothing reaches the backend until the final
//! confirmed submission, which is a single write to a [`DocumentStore`].
//!
//! # Example
//!
//! ```no_run
//! use cadastro::registration::*;
//!
//! # async fn run(company: CompanyInfo, address: Address) -> Result<(), FlowError> {
//! let store = MemoryStore::new();
//! let mut flow = RegistrationFlow::new();
//!
//! flow.submit_company(company)?;
//! flow.submit_address(address)?;
//! flow.accept_terms(true)?;
//! let id = flow.submit(&store).await?;
//! assert_eq!(flow.step(), RegistrationStep::Submitted);
//! # let _ = id;
//! # Ok(())
//! # }
//! ```

mod draft;
mod error;
mod flow;
mod store;
mod validate;

pub use draft::{Address, CompanyInfo, RegistrationDraft, SubmissionPayload};
pub use error::{FlowError, SubmissionError};
pub use flow::{DEFAULT_COLLECTION, FlowConfig, RegistrationFlow, RegistrationStep};
pub use store::{Document, DocumentId, DocumentStore, MemoryStore, StoreError};
pub use validate::{validate_address, validate_company};
