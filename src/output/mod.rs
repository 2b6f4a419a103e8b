//! Output formatting for address reports.

mod terminal;

pub use terminal::render_report;
