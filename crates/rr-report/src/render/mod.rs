//! Format-specific renderers over the visible item set.

pub mod csv;
pub mod html;
