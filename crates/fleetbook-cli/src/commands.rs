//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_listing, output_notice, output_vehicle_json, output_vehicles_json};
use fleetbook_app::config::Config;
use fleetbook_app::form::{Action, Response, VehicleForm};
use fleetbook_app::repository::open_vehicle_service;
use fleetbook_app::service::{Notice, VehicleService};
use fleetbook_store::PersistenceGateway;
use fleetbook_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

/// Run one command. `Ok(false)` means the action was refused (not found, duplicate, bad input).
pub fn execute(cli: Cli) -> Result<bool> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(store = %config.store_path().display(), "Using vehicle store");

    match cli.command {
        Commands::Add {
            id,
            make,
            model,
            year,
            color,
        } => {
            let mut form = VehicleForm {
                vehicle_id: id,
                make,
                model,
                year,
                color,
            };
            cmd_form(&config, &mut form, Action::Add)
        }

        Commands::View { id } => cmd_view(&config, id, output_format),

        Commands::Update {
            id,
            make,
            model,
            year,
            color,
        } => {
            let mut form = VehicleForm {
                vehicle_id: id,
                make: make.unwrap_or_default(),
                model: model.unwrap_or_default(),
                year: year.unwrap_or_default(),
                color: color.unwrap_or_default(),
            };
            cmd_form(&config, &mut form, Action::Update)
        }

        Commands::Delete { id } => {
            let mut form = VehicleForm {
                vehicle_id: id,
                ..Default::default()
            };
            cmd_form(&config, &mut form, Action::Delete)
        }

        Commands::List => cmd_list(&config, output_format),

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(show, set_data_dir, set_output, reset),
    }
}

fn cmd_form(config: &Config, form: &mut VehicleForm, action: Action) -> Result<bool> {
    let mut service = open_vehicle_service(config)?;
    Ok(print_response(&form.submit(action, &mut service)))
}

fn print_response(response: &Response) -> bool {
    match response {
        Response::Notice(notice) => output_notice(notice),
        Response::Listing(listing) => {
            output_listing(listing);
            true
        }
    }
}

fn cmd_view(config: &Config, id: String, output_format: OutputFormat) -> Result<bool> {
    let mut service = open_vehicle_service(config)?;
    view_vehicle(&mut service, id, output_format)
}

fn view_vehicle<G: PersistenceGateway>(
    service: &mut VehicleService<G>,
    id: String,
    output_format: OutputFormat,
) -> Result<bool> {
    if output_format == OutputFormat::Json {
        return match service.store().get_vehicle(&id) {
            Some(vehicle) => {
                output_vehicle_json(vehicle)?;
                Ok(true)
            }
            None => Ok(output_notice(&Notice::warning(
                "View Vehicle",
                "Vehicle not found.",
            ))),
        };
    }

    let mut form = VehicleForm {
        vehicle_id: id,
        ..Default::default()
    };
    Ok(print_response(&form.submit(Action::View, service)))
}

fn cmd_list(config: &Config, output_format: OutputFormat) -> Result<bool> {
    let service = open_vehicle_service(config)?;
    list_vehicles(&service, output_format)
}

fn list_vehicles<G: PersistenceGateway>(
    service: &VehicleService<G>,
    output_format: OutputFormat,
) -> Result<bool> {
    if output_format == OutputFormat::Json {
        output_vehicles_json(&service.store().all_vehicles())?;
    } else {
        output_listing(&service.list());
    }
    Ok(true)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<bool> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(true);
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetbook_store::{MemoryGateway, VehicleStore};
    use fleetbook_types::Vehicle;

    fn service_with_corolla() -> VehicleService<MemoryGateway> {
        let mut service =
            VehicleService::new(VehicleStore::with_gateway(MemoryGateway::new()).unwrap());
        service.add(Vehicle::new("V1", "Toyota", "Corolla", "2020", "Blue"));
        service
    }

    #[test]
    fn test_view_json_found_and_missing() {
        let mut service = service_with_corolla();
        assert!(view_vehicle(&mut service, "V1".to_string(), OutputFormat::Json).unwrap());
        assert!(!view_vehicle(&mut service, "V2".to_string(), OutputFormat::Json).unwrap());
    }

    #[test]
    fn test_view_table_found_and_missing() {
        let mut service = service_with_corolla();
        assert!(view_vehicle(&mut service, "V1".to_string(), OutputFormat::Table).unwrap());
        assert!(!view_vehicle(&mut service, "V2".to_string(), OutputFormat::Table).unwrap());
    }

    #[test]
    fn test_list_succeeds_in_both_formats() {
        let service = service_with_corolla();
        assert!(list_vehicles(&service, OutputFormat::Table).unwrap());
        assert!(list_vehicles(&service, OutputFormat::Json).unwrap());
    }

    #[test]
    fn test_print_response_reports_refusals() {
        let mut service = service_with_corolla();

        let mut form = VehicleForm {
            vehicle_id: "V1".to_string(),
            ..Default::default()
        };
        assert!(!print_response(&form.submit(Action::Add, &mut service)));

        form.vehicle_id = "ghost".to_string();
        assert!(!print_response(&form.submit(Action::Delete, &mut service)));

        form.vehicle_id = "V1".to_string();
        assert!(print_response(&form.submit(Action::Delete, &mut service)));
        assert!(print_response(&form.submit(Action::List, &mut service)));
    }
}
