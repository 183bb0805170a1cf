//! Terminal presentation of pace tables.

pub mod table_view;
pub mod theme;

pub use table_view::{render_table, status_message, RenderOptions};
pub use theme::{palette, Palette};
