//! Event types and observers.
//!
//! Submodules:
//! - [`input`] – raw key events, resolved direction events and the observers
//!   routing them to actors and bodies
pub mod input;
