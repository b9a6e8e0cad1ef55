//! Card system: templates, the standard catalog, and per-copy instances.
//!
//! ## Key Types
//!
//! - `SpecId`: identifier for a card template
//! - `CardSpec`: immutable template data (name, kind, power, cost)
//! - `Catalog`: template lookup; `Catalog::standard()` is the shipped set
//! - `CardId`: identifier for one physical copy in one game
//! - `CardInstance`: binds a copy to its template
//!
//! ## Identity
//!
//! The deck holds four copies of each template. Copies are distinguished by
//! `CardId`, assigned at deck creation; removal from a hand is always by id,
//! so two copies of 「剣」 can never cross-remove.

pub mod catalog;
pub mod instance;
pub mod spec;

pub use catalog::Catalog;
pub use instance::{CardId, CardInstance};
pub use spec::{CardKind, CardSpec, SpecId};
