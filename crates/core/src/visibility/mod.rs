//! Unit-scoped visibility resolution.
//!
//! Every list/search operation is restricted to rows reachable from the
//! caller's organizational unit through a declared ownership chain; a
//! privileged role bypasses scoping. The same resolver serves every record
//! type — chains are data held by the registry, not per-type code.
//!
//! - `chain` - ownership-chain shapes as declared data
//! - `resolver` - caller, scope predicate, and row filtering
//! - `search` - display-calendar date augmentation for search literals

pub mod chain;
pub mod resolver;
pub mod search;

pub use chain::{ChainError, Hop, OwnershipChain};
pub use resolver::{Caller, EmptyScopeFallback, Role, Scope, VisibilityResolver};
pub use search::{DisplayCalendar, augment_matches};
