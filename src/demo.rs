use log::{info, warn};

use snafu::{prelude::*, ErrorCompat, Snafu};

use std::fs;
use std::path::Path;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use voting_session::builder::Builder;
use voting_session::{
    App, Candidate, Election, NationalSummary, RegionStats, RegionalSummary, Router, Session,
    SessionError, VoteReceipt, VoterSummary, CandidateTally, View,
};

use crate::demo::config_reader::*;

pub mod config_reader;
pub mod render;

#[derive(Debug, Snafu)]
pub enum DemoError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Invalid demo configuration: {source}"))]
    InvalidConfig { source: SessionError },
    #[snafu(display("Missing required argument --{name}"))]
    MissingArgument { name: String },
    #[snafu(display("Unknown scenario action {action}"))]
    UnknownAction { action: String },
    #[snafu(display("Scenario action {action} is missing the {field} field"))]
    MissingField { action: String, field: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Assembles the immutable application dataset from the parsed fixture file.
fn build_app(config: &DemoConfig) -> DemoResult<App> {
    let mut builder = Builder::new();
    for region in config.regions.iter() {
        builder.region(&region.code, &region.name);
    }
    for admin in config.regional_admins.iter() {
        builder.regional_admin(&admin.region, &admin.admin_id, &admin.password);
    }
    builder.national_admin(&config.national_admin.username, &config.national_admin.password);
    for election in config.elections.iter() {
        builder.election(Election {
            id: election.id.clone(),
            title: election.title.clone(),
            description: election.description.clone(),
            candidates: election
                .candidates
                .iter()
                .map(|c| Candidate {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    party: c.party.clone(),
                })
                .collect(),
            deadline: election.deadline.clone(),
            category: election.category.clone(),
            region: election.region.clone(),
        });
    }
    for stats in config.region_stats.iter() {
        builder.region_stats(RegionStats {
            region: stats.region.clone(),
            total_voters: stats.total_voters,
            voted_count: stats.voted_count,
            leading_party: stats.leading_party.clone(),
            results: stats
                .results
                .iter()
                .map(|t| CandidateTally {
                    name: t.name.clone(),
                    party: t.party.clone(),
                    votes: t.votes,
                })
                .collect(),
        });
    }
    for party in config.national_results.iter() {
        builder.party_seats(&party.party, party.seats);
    }
    builder.build().context(InvalidConfigSnafu {})
}

// **** Transcript assembly ****

fn session_ok_entry(action: &str, session: &Session, view: &View) -> JSValue {
    match session.region() {
        Some(region) => json!({
            "action": action,
            "outcome": "ok",
            "region": region,
            "view": view.name()
        }),
        None => json!({
            "action": action,
            "outcome": "ok",
            "view": view.name()
        }),
    }
}

fn rejected_entry(action: &str, err: &SessionError, view: &View) -> JSValue {
    warn!("scenario: action {:?} rejected: {}", action, err);
    json!({
        "action": action,
        "outcome": "rejected",
        "errorKind": err.kind().to_string(),
        "error": err.to_string(),
        "view": view.name()
    })
}

fn receipt_entry(receipt: &VoteReceipt, view: &View) -> JSValue {
    json!({
        "action": "castVote",
        "outcome": "ok",
        "receipt": {
            "electionId": receipt.election_id,
            "candidateId": receipt.candidate_id,
            "digest": receipt.digest
        },
        "view": view.name()
    })
}

fn voter_summary_js(summary: &VoterSummary) -> JSValue {
    json!({
        "region": summary.region,
        "totalElections": summary.total_elections,
        "votesCast": summary.votes_cast,
        "pending": summary.pending,
        "allDone": summary.all_done
    })
}

fn regional_summary_js(summary: &RegionalSummary) -> JSValue {
    let results: Vec<JSValue> = summary
        .results
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "party": r.party,
                "votes": r.votes,
                "percentage": r.percentage
            })
        })
        .collect();
    json!({
        "region": summary.region,
        "totalVoters": summary.total_voters,
        "votedCount": summary.voted_count,
        "participationPct": summary.participation_pct,
        "leadingParty": summary.leading_party,
        "results": results
    })
}

fn national_summary_js(summary: &NationalSummary) -> JSValue {
    let seats: Vec<JSValue> = summary
        .seats
        .iter()
        .map(|p| json!({"party": p.party, "seats": p.seats}))
        .collect();
    let regions: Vec<JSValue> = summary
        .regions
        .iter()
        .map(|r| {
            json!({
                "region": r.region,
                "totalVoters": r.total_voters,
                "votedCount": r.voted_count,
                "participationPct": r.participation_pct,
                "leadingParty": r.leading_party
            })
        })
        .collect();
    json!({
        "seats": seats,
        "totalSeats": summary.total_seats,
        "leadingParty": summary.leading_party,
        "leadingSeats": summary.leading_seats,
        "leadingSharePct": summary.leading_share_pct,
        "totalVoters": summary.total_voters,
        "votedCount": summary.voted_count,
        "averageParticipationPct": summary.average_participation_pct,
        "regions": regions
    })
}

/// Renders the current screen to the terminal and returns its transcript
/// entry.
fn view_dashboard_entry(router: &Router) -> JSValue {
    let view = router.current_view();
    match &view {
        View::Login => {
            println!("== Login ==");
            json!({"action": "viewDashboard", "outcome": "ok", "view": view.name()})
        }
        View::VoterDashboard { region } => {
            // voter_summary is present whenever this view is selected.
            let summary = router.voter_summary().unwrap_or(VoterSummary {
                region: region.clone(),
                total_elections: 0,
                votes_cast: 0,
                pending: 0,
                all_done: false,
            });
            let elections = router.app().elections_for(region);
            print!("{}", render::voter_dashboard(&summary, &elections));
            json!({
                "action": "viewDashboard",
                "outcome": "ok",
                "view": view.name(),
                "summary": voter_summary_js(&summary)
            })
        }
        View::RegionalAdminDashboard { region } => {
            let summary = router.app().regional_summary(region);
            let summary_js = match &summary {
                Some(s) => {
                    print!("{}", render::regional_dashboard(s));
                    regional_summary_js(s)
                }
                None => {
                    warn!("no regional stats loaded for {:?}", region);
                    JSValue::Null
                }
            };
            json!({
                "action": "viewDashboard",
                "outcome": "ok",
                "view": view.name(),
                "summary": summary_js
            })
        }
        View::NationalAdminDashboard => {
            let summary = router.app().national_summary();
            print!("{}", render::national_dashboard(&summary));
            json!({
                "action": "viewDashboard",
                "outcome": "ok",
                "view": view.name(),
                "summary": national_summary_js(&summary)
            })
        }
    }
}

/// Replays one scenario event against the router and returns its transcript
/// entry. Rejected submissions leave the session untouched.
fn apply_event(router: &mut Router, event: &DemoEvent) -> DemoResult<JSValue> {
    let action = event.action.as_str();
    let entry = match action {
        "voterLogin" => {
            let voter_id = field(&event.voter_id, action, "voterId")?;
            let mobile = field(&event.mobile, action, "mobile")?;
            let res = router
                .submit_voter_credentials(voter_id, mobile)
                .map(|s| s.clone());
            match res {
                Ok(session) => session_ok_entry(action, &session, &router.current_view()),
                Err(e) => rejected_entry(action, &e, &router.current_view()),
            }
        }
        "regionalAdminLogin" => {
            let region = field(&event.region, action, "region")?;
            let admin_id = field(&event.admin_id, action, "adminId")?;
            let password = field(&event.password, action, "password")?;
            let res = router
                .submit_regional_admin_credentials(region, admin_id, password)
                .map(|s| s.clone());
            match res {
                Ok(session) => session_ok_entry(action, &session, &router.current_view()),
                Err(e) => rejected_entry(action, &e, &router.current_view()),
            }
        }
        "nationalAdminLogin" => {
            let username = field(&event.username, action, "username")?;
            let password = field(&event.password, action, "password")?;
            let res = router
                .submit_national_admin_credentials(username, password)
                .map(|s| s.clone());
            match res {
                Ok(session) => session_ok_entry(action, &session, &router.current_view()),
                Err(e) => rejected_entry(action, &e, &router.current_view()),
            }
        }
        "castVote" => {
            let election = field(&event.election, action, "election")?;
            let candidate = field(&event.candidate, action, "candidate")?;
            match router.cast_vote(election, candidate) {
                Ok(receipt) => receipt_entry(&receipt, &router.current_view()),
                Err(e) => rejected_entry(action, &e, &router.current_view()),
            }
        }
        "viewDashboard" => view_dashboard_entry(router),
        "logout" => {
            router.logout();
            json!({"action": "logout", "outcome": "ok", "view": router.current_view().name()})
        }
        _ => {
            return Err(DemoError::UnknownAction {
                action: action.to_string(),
            })
        }
    };
    Ok(entry)
}

fn field<'a>(value: &'a Option<String>, action: &str, name: &str) -> DemoResult<&'a str> {
    value.as_deref().context(MissingFieldSnafu {
        action: action.to_string(),
        field: name.to_string(),
    })
}

fn build_transcript_js(config: &DemoConfig, entries: &[JSValue]) -> JSValue {
    json!({
        "config": { "title": config.title },
        "events": entries
    })
}

pub fn run_scenario(
    config_path: Option<String>,
    scenario_path: Option<String>,
    reference_path: Option<String>,
    out_path: Option<String>,
) -> DemoResult<()> {
    let config_path = config_path.context(MissingArgumentSnafu {
        name: "config".to_string(),
    })?;
    let scenario_path = scenario_path.context(MissingArgumentSnafu {
        name: "scenario".to_string(),
    })?;

    let config = read_config(&config_path)?;
    info!(
        "config {:?}: {} regions, {} elections",
        config.title,
        config.regions.len(),
        config.elections.len()
    );
    let scenario = read_scenario(&scenario_path)?;
    info!("scenario: {} events", scenario.events.len());

    let app = build_app(&config)?;
    let mut router = Router::new(app);

    let mut entries: Vec<JSValue> = Vec::new();
    for event in scenario.events.iter() {
        let entry = apply_event(&mut router, event)?;
        entries.push(entry);
    }

    // Assemble the final json
    let transcript_js = build_transcript_js(&config, &entries);
    let pretty_js_transcript =
        serde_json::to_string_pretty(&transcript_js).context(ParsingJsonSnafu {
            path: scenario_path.clone(),
        })?;
    match out_path.as_deref() {
        None | Some("stdout") => {
            println!("transcript:{}", pretty_js_transcript);
        }
        Some(path) => {
            fs::write(path, &pretty_js_transcript).context(WritingJsonSnafu {
                path: path.to_string(),
            })?;
            info!("transcript written to {:?}", path);
        }
    }

    // The reference transcript, if provided for comparison
    if let Some(reference_p) = reference_path {
        let reference_js = read_reference(&reference_p)?;
        let pretty_js_reference =
            serde_json::to_string_pretty(&reference_js).context(ParsingJsonSnafu {
                path: reference_p.clone(),
            })?;
        if pretty_js_reference != pretty_js_transcript {
            warn!("Found differences with the reference transcript");
            print_diff(
                pretty_js_reference.as_str(),
                pretty_js_transcript.as_ref(),
                "\n",
            );
            whatever!("Difference detected between replayed transcript and reference transcript")
        }
    }

    Ok(())
}

fn read_reference(path: &str) -> DemoResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
        path: path.to_string(),
    })
}

fn run_scenario_test(test_name: &str, config_lpath: &str, scenario_lpath: &str, reference_lpath: &str) {
    let fixture_dir = option_env!("MATDAAN_FIXTURE_DIR").unwrap_or("fixtures");
    info!("Running test {}", test_name);
    let res = run_scenario(
        Some(format!("{}/{}/{}", fixture_dir, test_name, config_lpath)),
        Some(format!("{}/{}/{}", fixture_dir, test_name, scenario_lpath)),
        Some(format!("{}/{}/{}", fixture_dir, test_name, reference_lpath)),
        None,
    );
    if let Err(e) = res {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        panic!("scenario test {} failed", test_name);
    }
}

pub fn test_wrapper(test_name: &str) {
    run_scenario_test(
        test_name,
        format!("{}_config.json", test_name).as_str(),
        format!("{}_scenario.json", test_name).as_str(),
        format!("{}_expected_transcript.json", test_name).as_str(),
    )
}

/// True when the path exists; used by tests to give a clearer failure when
/// the fixture directory was not checked out.
pub fn fixture_exists(test_name: &str) -> bool {
    let fixture_dir = option_env!("MATDAAN_FIXTURE_DIR").unwrap_or("fixtures");
    Path::new(&format!("{}/{}", fixture_dir, test_name)).is_dir()
}
