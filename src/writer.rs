use chill::{Result, UserReport};

use csv::Writer;

pub fn write_report(report: &[UserReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for user_report in report {
        log::debug!("Serializing report: {user_report:?}");
        wtr.serialize(user_report)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    Ok(string)
}
