//! The recommendation engine: catalog derivation, fit scoring, and ranking.
//!
//! Everything in here is a pure, stateless function of its inputs. Callers
//! pass the current catalog into every call; there is no cached or global
//! catalog state.

pub mod catalog;
pub mod recommend;
pub mod score;

pub use catalog::*;
pub use recommend::*;
pub use score::*;
