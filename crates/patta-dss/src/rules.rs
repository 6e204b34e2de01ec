//! Static decision-support rule table
//!
//! Rules are plain data: an id, a display name, a priority and a predicate.
//! Table order is significant. When two matching rules share a priority,
//! the one listed first here is recommended first.

use crate::VillageAggregate;
use patta_domain::AssetCoverage;

/// Everything a rule predicate may look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInput<'a> {
    /// Village name
    pub village: &'a str,
    /// Claims linked to the village
    pub claim_count: usize,
    /// Claims still unlinked or awaiting review
    pub pending_claims: usize,
    /// Community Forest Rights claims
    pub cfr_claims: usize,
    /// Individual Forest Rights claims
    pub ifr_claims: usize,
    /// Water coverage (0-100)
    pub water: f64,
    /// Forest coverage (0-100)
    pub forest: f64,
    /// Agricultural coverage (0-100)
    pub agriculture: f64,
}

impl<'a> RuleInput<'a> {
    /// Merge a village aggregate with its asset coverage
    pub fn new(aggregate: &'a VillageAggregate, coverage: &AssetCoverage) -> Self {
        Self {
            village: &aggregate.village,
            claim_count: aggregate.claim_count,
            pending_claims: aggregate.pending_claims,
            cfr_claims: aggregate.cfr_claims,
            ifr_claims: aggregate.ifr_claims,
            water: coverage.water,
            forest: coverage.forest,
            agriculture: coverage.agriculture,
        }
    }
}

/// One decision rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier
    pub id: &'static str,
    /// Recommendation text
    pub name: &'static str,
    /// Higher runs first
    pub priority: i32,
    /// When the rule fires
    pub criteria: fn(&RuleInput<'_>) -> bool,
    /// Why the recommendation is made
    pub justification: &'static str,
}

impl Rule {
    /// Evaluate the rule against an input
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        (self.criteria)(input)
    }
}

fn water_scarcity(i: &RuleInput<'_>) -> bool {
    i.water < 20.0
}

fn farm_ponds(i: &RuleInput<'_>) -> bool {
    i.water < 30.0 && i.agriculture > 25.0
}

fn gram_sabha_backlog(i: &RuleInput<'_>) -> bool {
    i.pending_claims > 0 && i.pending_claims * 2 >= i.claim_count
}

fn cfr_management_plan(i: &RuleInput<'_>) -> bool {
    i.forest > 60.0 && i.claim_count > 0
}

fn minor_forest_produce(i: &RuleInput<'_>) -> bool {
    i.cfr_claims >= 2 && i.forest > 50.0
}

fn ifr_livelihood(i: &RuleInput<'_>) -> bool {
    i.ifr_claims > 0 && i.agriculture > 20.0
}

fn cfr_awareness(i: &RuleInput<'_>) -> bool {
    i.forest > 40.0 && i.cfr_claims == 0 && i.claim_count > 0
}

fn afforestation(i: &RuleInput<'_>) -> bool {
    i.forest < 30.0 && i.claim_count > 0
}

/// The decision-support rule table, in tie-break order
pub static RULE_TABLE: [Rule; 8] = [
    Rule {
        id: "water-scarcity",
        name: "Jal Jeevan Mission: prioritise drinking-water supply and borewells",
        priority: 9,
        criteria: water_scarcity,
        justification: "Water bodies cover less than 20% of the village area",
    },
    Rule {
        id: "farm-ponds",
        name: "MGNREGA: sanction farm ponds and check dams",
        priority: 8,
        criteria: farm_ponds,
        justification: "Agricultural land depends on scarce surface water (water < 30%, agriculture > 25%)",
    },
    Rule {
        id: "gram-sabha-backlog",
        name: "Convene a Gram Sabha to clear pending forest-rights claims",
        priority: 8,
        criteria: gram_sabha_backlog,
        justification: "Half or more of the village's claims are still unlinked or awaiting review",
    },
    Rule {
        id: "cfr-management-plan",
        name: "Prepare a Community Forest Resource management plan",
        priority: 7,
        criteria: cfr_management_plan,
        justification: "Forest covers more than 60% of a village with forest-rights claims",
    },
    Rule {
        id: "minor-forest-produce",
        name: "Van Dhan Vikas Kendra: set up minor forest produce collection",
        priority: 6,
        criteria: minor_forest_produce,
        justification: "Two or more community forest rights claims in a forested village (forest > 50%)",
    },
    Rule {
        id: "ifr-livelihood",
        name: "PM-KISAN: enrol individual forest rights holders",
        priority: 6,
        criteria: ifr_livelihood,
        justification: "Individual forest rights holders cultivate land (agriculture > 20%)",
    },
    Rule {
        id: "cfr-awareness",
        name: "Run a community forest rights awareness drive",
        priority: 4,
        criteria: cfr_awareness,
        justification: "Substantial forest cover (> 40%) but no community forest rights claims filed",
    },
    Rule {
        id: "afforestation",
        name: "Green India Mission: assisted natural regeneration",
        priority: 3,
        criteria: afforestation,
        justification: "Forest cover below 30% in a village with forest-rights claims",
    },
];

/// Look up a rule in the table by id
pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULE_TABLE.iter().find(|rule| rule.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn input(claims: (usize, usize, usize, usize), coverage: (f64, f64, f64)) -> RuleInput<'static> {
        RuleInput {
            village: "Khairi",
            claim_count: claims.0,
            pending_claims: claims.1,
            cfr_claims: claims.2,
            ifr_claims: claims.3,
            water: coverage.0,
            forest: coverage.1,
            agriculture: coverage.2,
        }
    }

    #[test]
    fn test_rule_ids_unique() {
        let ids: HashSet<&str> = RULE_TABLE.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), RULE_TABLE.len());
    }

    #[test]
    fn test_water_threshold_is_strict() {
        let rule = find_rule("water-scarcity").unwrap();
        assert!(rule.matches(&input((0, 0, 0, 0), (19.9, 0.0, 0.0))));
        assert!(!rule.matches(&input((0, 0, 0, 0), (20.0, 0.0, 0.0))));
    }

    #[test]
    fn test_backlog_needs_pending_claims() {
        let rule = find_rule("gram-sabha-backlog").unwrap();
        assert!(!rule.matches(&input((0, 0, 0, 0), (50.0, 50.0, 50.0))));
        assert!(rule.matches(&input((12, 6, 0, 0), (50.0, 50.0, 50.0))));
        assert!(!rule.matches(&input((12, 5, 0, 0), (50.0, 50.0, 50.0))));
    }

    #[test]
    fn test_claim_gated_rules_ignore_empty_villages() {
        let empty = input((0, 0, 0, 0), (80.0, 80.0, 80.0));
        assert!(RULE_TABLE.iter().all(|rule| !rule.matches(&empty)));
    }

    #[test]
    fn test_find_unknown_rule() {
        assert!(find_rule("no-such-rule").is_none());
    }
}
