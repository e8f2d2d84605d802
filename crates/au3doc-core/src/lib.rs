//! Core documentation model for the AutoIt3 standard library
//!
//! This crate provides the pure logic shared by every consumer of the
//! documentation data: signature records, the hover and completion
//! formatters, and the case-insensitive registry built from an ordered
//! list of documentation modules.
//!
//! # Example
//!
//! ```
//! use au3doc_core::{CompletionKind, DocModule, Parameter, Registry, Signature};
//!
//! fn table() -> Vec<Signature> {
//!     vec![Signature {
//!         name: "_ColorGetRed".to_string(),
//!         documentation: "Returns the red component of a given color".to_string(),
//!         label: "_ColorGetRed ( $iColor )".to_string(),
//!         params: vec![Parameter {
//!             label: "$iColor".to_string(),
//!             documentation: "The color to work with".to_string(),
//!         }],
//!     }]
//! }
//!
//! let modules = [DocModule {
//!     name: "color",
//!     kind: CompletionKind::Function,
//!     include: Some("Color.au3"),
//!     table,
//! }];
//!
//! let registry = Registry::build(&modules).unwrap();
//! assert!(registry.hover("_COLORGETRED").is_some());
//! ```

pub mod completion;
pub mod error;
pub mod hover;
pub mod registry;
pub mod signature;

// Re-export main types for convenience
pub use completion::{format_completions, CompletionEntry, CompletionKind};
pub use error::DocError;
pub use hover::format_hover;
pub use registry::{aggregate, DocModule, Registry};
pub use signature::{Parameter, Signature, SignatureTable};
