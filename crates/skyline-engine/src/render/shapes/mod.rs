//! Shape renderers.
//!
//! Each renderer draws only its own command kind, so the call order between
//! renderers decides layering across kinds. Within a kind, paint order is
//! draw-list order.

mod common;

pub mod rect;
pub mod triangle;
