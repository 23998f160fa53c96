//! Domain macros organized by usage context.
//!
//! Sub-modules group macros by the domain area they serve:
//! - [`entities`]: Entity and value-object type macros

#[macro_use]
mod entities;
