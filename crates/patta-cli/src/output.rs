//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use patta_domain::{Claim, ClaimStatus, DssRecommendation, Village};
use patta_dss::{Rule, VillageAggregate};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[&Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(claims)?),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Quiet => Ok(claims
                .iter()
                .map(|c| c.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single claim.
    pub fn format_claim(&self, claim: &Claim) -> Result<String> {
        self.format_claims(&[claim])
    }

    fn format_claims_table(&self, claims: &[&Claim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Claimant", "Village", "Type", "Area", "Linked to", "Min conf", "Status",
        ]);

        for claim in claims {
            let min_confidence = format!("{:.2}", claim.min_confidence());
            builder.push_record([
                claim.id.to_string()[..8].to_string(), // Truncate ID for readability
                claim.claimant_name.value.clone(),
                claim.village.value.clone(),
                claim.claim_type.value.to_string(),
                claim.area.value.clone(),
                claim.linked_village.clone().unwrap_or_else(|| "-".to_string()),
                min_confidence,
                self.status(claim.status),
            ]);
        }

        render(builder)
    }

    /// Format recommendations, highest priority first.
    pub fn format_recommendations(&self, village: &str, recs: &[DssRecommendation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(recs)?),
            OutputFormat::Quiet => Ok(recs
                .iter()
                .map(|r| r.rule_id.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if recs.is_empty() {
                    return Ok(self.info(&format!("No recommendations triggered for {}.", village)));
                }

                let mut builder = Builder::default();
                builder.push_record(["Priority", "Recommendation", "Justification"]);
                for rec in recs {
                    builder.push_record([
                        rec.priority.to_string(),
                        rec.recommendation.clone(),
                        rec.justification.clone(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format village aggregates.
    pub fn format_aggregates(&self, aggregates: &[VillageAggregate]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(aggregates)?),
            OutputFormat::Quiet => Ok(aggregates
                .iter()
                .map(|a| a.village.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if aggregates.is_empty() {
                    return Ok(self.colorize("No linked claims.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Village", "Claims", "Pending", "CFR", "IFR"]);
                for agg in aggregates {
                    builder.push_record([
                        agg.village.clone(),
                        agg.claim_count.to_string(),
                        agg.pending_claims.to_string(),
                        agg.cfr_claims.to_string(),
                        agg.ifr_claims.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the rule table.
    pub fn format_rules(&self, rules: &[Rule]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rules
                    .iter()
                    .enumerate()
                    .map(|(order, rule)| {
                        serde_json::json!({
                            "order": order + 1,
                            "id": rule.id,
                            "name": rule.name,
                            "priority": rule.priority,
                            "justification": rule.justification,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(rules.iter().map(|r| r.id).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "ID", "Priority", "Recommendation", "Fires when"]);
                for (order, rule) in rules.iter().enumerate() {
                    builder.push_record([
                        (order + 1).to_string(),
                        rule.id.to_string(),
                        rule.priority.to_string(),
                        rule.name.to_string(),
                        rule.justification.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format gazetteer villages.
    pub fn format_villages(&self, villages: &[Village]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(villages)?),
            OutputFormat::Quiet => Ok(villages
                .iter()
                .map(|v| v.name.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if villages.is_empty() {
                    return Ok(self.colorize("No villages in the gazetteer.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Water %", "Forest %", "Agriculture %"]);
                for village in villages {
                    let coverage = &village.asset_coverage;
                    builder.push_record([
                        village.id.to_string(),
                        village.name.clone(),
                        format!("{:.0}", coverage.water),
                        format!("{:.0}", coverage.forest),
                        format!("{:.0}", coverage.agriculture),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a status transition result.
    pub fn transitioned(&self, claim: &Claim, action: &str) -> String {
        let short_id = &claim.id.to_string()[..8];
        self.success(&format!("{} {} -> {}", action, short_id, claim.status))
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} claim(s)", operation, count))
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether output is meant for people rather than scripts.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    fn status(&self, status: ClaimStatus) -> String {
        let color = match status {
            ClaimStatus::Unlinked => "magenta",
            ClaimStatus::NeedsReview => "yellow",
            ClaimStatus::Reviewed => "cyan",
            ClaimStatus::Linked => "green",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
