use indexmap::IndexMap;
use pulse_core::entities::RoleMatch;
use pulse_match::Suggestion;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MatchArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct MatchEntry {
    #[serde(flatten)]
    pub matched: RoleMatch,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub taxonomy_version: String,
    pub matches: IndexMap<String, MatchEntry>,
}

/// Handle `pulse match`.
pub fn handle(args: &MatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)
}

pub fn run(args: &MatchArgs, ctx: &AppContext) -> anyhow::Result<MatchResponse> {
    let titles: Vec<&str> = if args.titles.is_empty() {
        ctx.bundle
            .employees
            .iter()
            .map(pulse_core::entities::EmployeeRecord::title_for_matching)
            .collect()
    } else {
        args.titles.iter().map(String::as_str).collect()
    };
    if titles.is_empty() {
        anyhow::bail!("match: no titles given and the bundle has no employees");
    }

    let matcher = ctx.matcher();
    let context = ctx.bundle.context();
    let limit = ctx.config.matcher.suggestion_limit;

    let matches = matcher
        .match_batch(&titles, context.as_ref())
        .into_iter()
        .map(|(title, matched)| {
            let suggestions = if args.suggest && !matched.is_resolved() {
                matcher.suggest(&title, limit)
            } else {
                Vec::new()
            };
            (title, MatchEntry { matched, suggestions })
        })
        .collect();

    Ok(MatchResponse {
        taxonomy_version: matcher.taxonomy().version().to_string(),
        matches,
    })
}
