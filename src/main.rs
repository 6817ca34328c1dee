mod args;
mod config;
mod reader;
mod writer;

use chill::{
    input::{InputEvent, UserRecord},
    Directory, Result,
};

use std::path::Path;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let args = args::parse_input_args()?;
    log::debug!("Found filepaths as input args: {args:?}");

    let directory = load_directory(&args.users_path)?;

    log::debug!("Loaded {} users. Beginning session...", directory.len());

    let directory = process_session(directory, &args.events_path)?;

    log::debug!("Session complete. Beginning report...");

    report_to_std_out(&directory)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read users file into a fresh directory, skipping records that don't parse
fn load_directory(users_path: &Path) -> Result<Directory> {
    let mut rdr = reader::build_csv_reader(users_path)?;
    let mut directory = Directory::new();

    for record in rdr.deserialize::<UserRecord>() {
        log::debug!("Parsing record into UserRecord: {record:?}");
        let user = match record.map_err(anyhow::Error::from).and_then(UserRecord::parse_user) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        directory.add(user);
    }

    Ok(directory)
}

/// Read session events file and play each event against the directory.
///
/// A rejected event is reported and the session carries on with the next one.
fn process_session(directory: Directory, events_path: &Path) -> Result<Directory> {
    let mut rdr = reader::build_csv_reader(events_path)?;
    let mut session = chill::build_session_service(directory);

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_event into SessionEvent: {input_event:?}");
        let event = match input_event.parse_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = session.process_event(event) {
            log::warn!("{e}");
        }
    }

    Ok(session.take())
}

/// Build report from the directory, and write report to stdout
fn report_to_std_out(directory: &Directory) -> Result {
    let report = chill::build_report(directory);
    log::debug!("Successfully built reports for {} users", report.len());

    let output = writer::write_report(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{output}");

    Ok(())
}
