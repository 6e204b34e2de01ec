//! Villages command implementation.

use crate::error::Result;
use crate::session::Session;

/// Execute the villages command.
pub fn execute_villages(session: &Session) -> Result<()> {
    let gazetteer = session.gazetteer()?;
    println!("{}", session.formatter.format_villages(gazetteer.as_slice())?);
    Ok(())
}
