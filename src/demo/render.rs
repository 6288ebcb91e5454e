use voting_session::{Election, NationalSummary, RegionalSummary, VoterSummary};

use std::fmt::Write as _;

/// The voter dashboard: progress header plus the election cards offered to
/// the voter's region.
pub fn voter_dashboard(summary: &VoterSummary, elections: &[&Election]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Voter Dashboard: {} ==", summary.region);
    let _ = writeln!(
        out,
        "Elections: {}   Votes cast: {}   Pending: {}",
        summary.total_elections, summary.votes_cast, summary.pending
    );
    for election in elections {
        let category = election.category.as_deref().unwrap_or("General");
        let _ = writeln!(out, "  [{}] {}: {}", category, election.title, election.description);
        for candidate in election.candidates.iter() {
            let _ = writeln!(out, "      {}: {} ({})", candidate.id, candidate.name, candidate.party);
        }
        if let Some(deadline) = election.deadline.as_deref() {
            let _ = writeln!(out, "      deadline: {}", deadline);
        }
    }
    if summary.all_done {
        let _ = writeln!(out, "All votes cast successfully.");
    }
    out
}

/// The regional admin dashboard: participation figures and the per-candidate
/// result table for one region.
pub fn regional_dashboard(summary: &RegionalSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Regional Admin Dashboard: {} ==", summary.region);
    let _ = writeln!(
        out,
        "Registered voters: {}   Votes cast: {}   Participation: {:.1}%",
        summary.total_voters, summary.voted_count, summary.participation_pct
    );
    let _ = writeln!(out, "Leading party: {}", summary.leading_party);
    for result in summary.results.iter() {
        let _ = writeln!(
            out,
            "  {:<28} {:<18} {:>8} votes  {:>5.1}%",
            result.name, result.party, result.votes, result.percentage
        );
    }
    out
}

/// The national (master) admin dashboard: seat distribution and the
/// per-region participation table.
pub fn national_dashboard(summary: &NationalSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== National Admin Dashboard ==");
    let _ = writeln!(
        out,
        "{} leads with {} of {} seats ({:.1}%)",
        summary.leading_party, summary.leading_seats, summary.total_seats, summary.leading_share_pct
    );
    for party in summary.seats.iter() {
        let _ = writeln!(out, "  {:<18} {:>4} seats", party.party, party.seats);
    }
    let _ = writeln!(
        out,
        "Total voters: {}   Votes cast: {}   Avg participation: {:.1}%",
        summary.total_voters, summary.voted_count, summary.average_participation_pct
    );
    for region in summary.regions.iter() {
        let _ = writeln!(
            out,
            "  {:<18} {:>8} voters  {:>8} cast  {:>5.1}%  leading: {}",
            region.region,
            region.total_voters,
            region.voted_count,
            region.participation_pct,
            region.leading_party
        );
    }
    out
}
