//! Decision-support command implementations.

use crate::cli::{AggregateArgs, RecommendArgs};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::Session;
use patta_domain::traits::VillageRegistry;
use patta_dss::{aggregate, aggregate_all, DssError};

/// Execute the aggregate command.
pub fn execute_aggregate(args: AggregateArgs, session: &Session) -> Result<()> {
    let claims = session.ledger.claims();

    let aggregates = match args.village {
        Some(name) => {
            let gazetteer = session.gazetteer()?;
            let village = gazetteer
                .find_by_name(&name)?
                .ok_or(DssError::VillageNotFound(name))?;
            vec![aggregate(&village.name, &claims)]
        }
        None => aggregate_all(&claims),
    };

    println!("{}", session.formatter.format_aggregates(&aggregates)?);
    Ok(())
}

/// Execute the recommend command.
pub fn execute_recommend(args: RecommendArgs, session: &Session) -> Result<()> {
    let claims = session.ledger.claims();
    let gazetteer = session.gazetteer()?;
    let advice = session.advisor().advise(&args.village, &claims, &gazetteer)?;

    let formatter = &session.formatter;
    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&advice)?),
        OutputFormat::Quiet => println!(
            "{}",
            formatter.format_recommendations(&advice.village.name, &advice.recommendations)?
        ),
        OutputFormat::Table => {
            let agg = &advice.aggregate;
            let coverage = &advice.village.asset_coverage;
            println!(
                "{}",
                formatter.info(&format!(
                    "{}: {} claim(s), {} pending, {} CFR, {} IFR | water {:.0}%, forest {:.0}%, agriculture {:.0}%",
                    advice.village.name,
                    agg.claim_count,
                    agg.pending_claims,
                    agg.cfr_claims,
                    agg.ifr_claims,
                    coverage.water,
                    coverage.forest,
                    coverage.agriculture,
                ))
            );
            println!(
                "{}",
                formatter.format_recommendations(&advice.village.name, &advice.recommendations)?
            );
        }
    }
    Ok(())
}

/// Execute the rules command.
pub fn execute_rules(session: &Session) -> Result<()> {
    println!("{}", session.formatter.format_rules(session.engine().rules())?);
    Ok(())
}
