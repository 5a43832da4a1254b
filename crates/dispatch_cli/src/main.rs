//! Dispatch CLI probe.
//!
//! # Responsibility
//! - Load `DISPATCH_*` configuration, start logging and open the database.
//! - Print one line per aggregate with its stored row count.

use dispatch_core::db::open_db;
use dispatch_core::{
    core_version, init_logging, CoreConfig, EntityRepository, RepoResult,
    SqliteAddressRepository, SqliteCarRepository, SqliteDriverRepository,
    SqlitePassengerRepository,
};
use log::info;
use rusqlite::Connection;
use std::process::ExitCode;

/// Row counts per aggregate.
struct Summary {
    drivers: usize,
    drivers_with_car: usize,
    cars: usize,
    passengers: usize,
    addresses: usize,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("dispatch: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let summary = summarize(&conn).map_err(|err| err.to_string())?;
    info!(
        "event=cli_summary module=cli status=ok drivers={} cars={}",
        summary.drivers, summary.cars
    );

    println!("dispatch_core version={}", core_version());
    println!("database={}", config.db_path.display());
    println!(
        "drivers={} (with car: {})",
        summary.drivers, summary.drivers_with_car
    );
    println!("cars={}", summary.cars);
    println!("passengers={}", summary.passengers);
    println!("addresses={}", summary.addresses);
    Ok(())
}

fn summarize(conn: &Connection) -> RepoResult<Summary> {
    let drivers = SqliteDriverRepository::try_new(conn)?.find_all()?;
    Ok(Summary {
        drivers_with_car: drivers.iter().filter(|driver| driver.car.is_some()).count(),
        drivers: drivers.len(),
        cars: SqliteCarRepository::try_new(conn)?.find_all()?.len(),
        passengers: SqlitePassengerRepository::try_new(conn)?.find_all()?.len(),
        addresses: SqliteAddressRepository::try_new(conn)?.find_all()?.len(),
    })
}
