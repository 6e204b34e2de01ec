//! Review, edit and link command implementations.

use crate::cli::{EditArgs, LinkArgs, ReviewArgs};
use crate::error::{CliError, Result};
use crate::session::Session;
use patta_domain::traits::VillageRegistry;
use patta_domain::ClaimField;
use patta_lifecycle::ReviewEdits;

/// Execute the review command.
pub fn execute_review(args: ReviewArgs, session: &mut Session) -> Result<()> {
    let id = session.ledger.resolve(&args.id)?;
    let edits = review_edits(args);

    // A reviewer-chosen village must be one the map knows about
    if let Some(name) = &edits.linked_village {
        let gazetteer = session.gazetteer()?;
        if gazetteer.find_by_name(name)?.is_none() {
            return Err(CliError::InvalidInput(format!(
                "Village '{}' is not in the gazetteer",
                name
            )));
        }
    }

    let lifecycle = &mut session.lifecycle;
    let claim = session
        .ledger
        .apply(id, |claim| lifecycle.review(claim, &edits).map_err(CliError::from))?;
    session.save()?;

    println!("{}", session.formatter.transitioned(&claim, "Reviewed"));
    Ok(())
}

/// Execute the edit command.
pub fn execute_edit(args: EditArgs, session: &mut Session) -> Result<()> {
    let id = session.ledger.resolve(&args.id)?;
    let field: ClaimField = args.field.into();

    let lifecycle = &mut session.lifecycle;
    let claim = session
        .ledger
        .apply(id, |claim| lifecycle.edit(claim, field, &args.value).map_err(CliError::from))?;
    session.save()?;

    let message = format!("Set {} to '{}'", field, claim.field_value(field));
    println!("{}", session.formatter.success(&message));
    Ok(())
}

/// Execute the link command.
pub fn execute_link(args: LinkArgs, session: &mut Session) -> Result<()> {
    let id = session.ledger.resolve(&args.id)?;

    let lifecycle = &mut session.lifecycle;
    let claim = session
        .ledger
        .apply(id, |claim| lifecycle.link(claim).map_err(CliError::from))?;
    session.save()?;

    println!("{}", session.formatter.transitioned(&claim, "Linked"));
    Ok(())
}

fn review_edits(args: ReviewArgs) -> ReviewEdits {
    ReviewEdits {
        claimant_name: args.claimant_name,
        village: args.village,
        claim_type: args.claim_type.map(Into::into),
        area: args.area,
        date: args.date,
        linked_village: args.linked_village,
    }
}
