//! Claim listing command implementations.

use crate::cli::ClaimsArgs;
use crate::error::Result;
use crate::session::Session;
use patta_domain::traits::{ClaimQuery, ClaimStore};
use patta_domain::Claim;
use patta_lifecycle::review_queue;

/// Execute the claims command.
pub fn execute_claims(args: ClaimsArgs, session: &Session) -> Result<()> {
    let query = build_query(args);
    let claims = session.ledger.query_claims(&query)?;
    let refs: Vec<&Claim> = claims.iter().collect();

    println!("{}", session.formatter.format_claims(&refs)?);
    Ok(())
}

/// Execute the queue command.
pub fn execute_queue(session: &Session) -> Result<()> {
    let claims = session.ledger.claims();
    let queue = review_queue(&claims);

    println!("{}", session.formatter.format_claims(&queue)?);
    if session.formatter.is_table() && !queue.is_empty() {
        println!(
            "{}",
            session.formatter.info(&format!("{} claim(s) awaiting review", queue.len()))
        );
    }
    Ok(())
}

fn build_query(args: ClaimsArgs) -> ClaimQuery {
    ClaimQuery {
        linked_village: args.village,
        status: args.status.map(Into::into),
        claim_type: args.claim_type.map(Into::into),
        limit: args.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ClaimTypeArg, StatusArg};
    use patta_domain::{ClaimStatus, ClaimType};

    #[test]
    fn test_query_construction() {
        let query = build_query(ClaimsArgs {
            village: Some("Khairi".to_string()),
            status: Some(StatusArg::Reviewed),
            claim_type: Some(ClaimTypeArg::Cfr),
            limit: Some(5),
        });
        assert_eq!(query.linked_village.as_deref(), Some("Khairi"));
        assert_eq!(query.status, Some(ClaimStatus::Reviewed));
        assert_eq!(query.claim_type, Some(ClaimType::Cfr));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_empty_args_match_everything() {
        let query = build_query(ClaimsArgs {
            village: None,
            status: None,
            claim_type: None,
            limit: None,
        });
        assert!(query.linked_village.is_none());
        assert!(query.status.is_none());
    }
}
