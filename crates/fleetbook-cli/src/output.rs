//! Output formatting module

use fleetbook_app::service::{Listing, Notice, Severity};
use fleetbook_types::{Result, Vehicle};

/// Print a notice; info to stdout, anything else to stderr. Returns success.
pub fn output_notice(notice: &Notice) -> bool {
    match notice.severity {
        Severity::Info => println!("{}", notice.message),
        Severity::Warning | Severity::Error => {
            eprintln!("{}: {}", notice.title, notice.message)
        }
    }
    notice.is_success()
}

pub fn output_listing(listing: &Listing) {
    for line in listing.lines() {
        println!("{}", line);
    }
}

pub fn output_vehicles_json(vehicles: &[&Vehicle]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(vehicles)?);
    Ok(())
}

pub fn output_vehicle_json(vehicle: &Vehicle) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(vehicle)?);
    Ok(())
}
