//! Scanner façade: lexical recognizers consumed by the parser dispatcher.
//!
//! The distilled specification treats these scanners as an external
//! collaborator, but no crate in this codebase's dependency set ships them,
//! so they live here, grounded in the `nom`-combinator style used by the
//! teacher's `grammar/inlines/*` modules (see DESIGN.md). Unlike the
//! teacher's `Span<'a> = LocatedSpan<&'a str>`, these operate on plain
//! `&str` — there is no position to track (DESIGN.md D3).

pub mod autolink;
pub mod entity;
pub mod html_tag;
pub mod link_title;
pub mod link_url;
pub mod whitespace;

pub use autolink::{scan_autolink_email, scan_autolink_uri};
pub use entity::scan_entity;
pub use html_tag::scan_html_tag;
pub use link_title::scan_link_title;
pub use link_url::scan_link_url;
pub use whitespace::{scan_spacechars, scan_spnl};
