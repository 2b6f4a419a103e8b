pub mod models;
pub mod output;

pub use models::{AddressError, Ipv4Info};
pub use output::render_report;

use colored::Colorize;

/// Parse an address string and render the full report for it.
///
/// Derivation and formatting stay separate so both halves are testable on
/// their own; this is just the glue the binary calls.
pub fn report_for(input: &str) -> Result<String, AddressError> {
    log::debug!("report_for({input})", input = input.trim().on_blue());
    let info = Ipv4Info::new(input)?;
    log::info!("# parsed {info}");
    Ok(render_report(&info))
}
