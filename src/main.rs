// cargo watch -x 'fmt' -x 'run'

use colored::Colorize;
use ipv4_address_info::report_for;
use std::error::Error;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main.rs minimal as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    print!("Zadejte IPv4 adresu (např. 192.168.1.1): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match report_for(&line) {
        Ok(report) => {
            println!();
            println!("{report}");
        }
        Err(e) => {
            log::warn!(
                "{rejected} input {input}: {e}",
                rejected = "rejected".on_red(),
                input = line.trim().on_blue(),
            );
            // The original program surfaces one generic message for every
            // validation failure; the specific kind only goes to the log.
            println!("{}", e.collapsed());
        }
    }

    Ok(())
}
