// ********* Input data structures ***********

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::Display;

/// The role tier attached to a session after a successful login.
///
/// `Unauthenticated` is the initial state and the state after logout.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Role {
    Unauthenticated,
    Voter,
    RegionalAdmin,
    NationalAdmin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Unauthenticated => "unauthenticated",
            Role::Voter => "voter",
            Role::RegionalAdmin => "regionalAdmin",
            Role::NationalAdmin => "nationalAdmin",
        };
        write!(f, "{}", s)
    }
}

/// The process-wide record of the current login.
///
/// Invariant: `region` is present if and only if the role is region-scoped
/// (`Voter` or `RegionalAdmin`). The constructors below are the only way to
/// build a session, which keeps the invariant true everywhere.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Session {
    role: Role,
    region: Option<String>,
    // The elections this session has already voted in. Only ever grows.
    completed: BTreeSet<String>,
}

impl Session {
    pub(crate) fn logged_out() -> Session {
        Session {
            role: Role::Unauthenticated,
            region: None,
            completed: BTreeSet::new(),
        }
    }

    pub(crate) fn voter(region: String) -> Session {
        Session {
            role: Role::Voter,
            region: Some(region),
            completed: BTreeSet::new(),
        }
    }

    pub(crate) fn regional_admin(region: String) -> Session {
        Session {
            role: Role::RegionalAdmin,
            region: Some(region),
            completed: BTreeSet::new(),
        }
    }

    pub(crate) fn national_admin() -> Session {
        Session {
            role: Role::NationalAdmin,
            region: None,
            completed: BTreeSet::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The ids of the elections this session has voted in, in sorted order.
    pub fn completed_elections(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(|s| s.as_str())
    }

    pub(crate) fn has_voted(&self, election_id: &str) -> bool {
        self.completed.contains(election_id)
    }

    pub(crate) fn record_vote(&mut self, election_id: String) {
        self.completed.insert(election_id);
    }
}

/// One entry of the region registry: a 2-character numeric code mapped to a
/// region name. The code matches the first two characters of a voter
/// identifier.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RegionEntry {
    pub code: String,
    pub name: String,
}

/// The credential pair configured for the admin of one region.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RegionalAdminCredential {
    pub region: String,
    pub admin_id: String,
    pub password: String,
}

/// The single national (master) admin credential pair.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct NationalAdminCredential {
    pub username: String,
    pub password: String,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party: String,
}

/// A mock election as displayed on the voter dashboard.
///
/// `region`: if set, the election is only offered to voters of that region.
/// If not set, it is offered everywhere (a national election).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Election {
    pub id: String,
    pub title: String,
    pub description: String,
    pub candidates: Vec<Candidate>,
    pub deadline: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
}

/// The static tally line for one candidate of a regional result sheet.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateTally {
    pub name: String,
    pub party: String,
    pub votes: u64,
}

/// The static participation and result figures for one region.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RegionStats {
    pub region: String,
    pub total_voters: u64,
    pub voted_count: u64,
    pub leading_party: String,
    pub results: Vec<CandidateTally>,
}

/// National seat count for one party.
///
/// The configured list puts the leading party first; aggregate buckets such
/// as "Others" go last.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PartySeats {
    pub party: String,
    pub seats: u64,
}

// ******** Output data structures *********

/// Acknowledgment returned after a vote is recorded for the session.
///
/// The digest is a SHA-256 over (region, election, candidate). It is a demo
/// token, not a cryptographic protection of the ballot.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteReceipt {
    pub election_id: String,
    pub candidate_id: String,
    pub digest: String,
}

/// What the voter dashboard header displays: progress through the available
/// elections.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoterSummary {
    pub region: String,
    pub total_elections: usize,
    pub votes_cast: usize,
    pub pending: usize,
    pub all_done: bool,
}

/// One result line of a regional dashboard.
#[derive(PartialEq, Debug, Clone)]
pub struct CandidateResult {
    pub name: String,
    pub party: String,
    pub votes: u64,
    /// Share of the regional votes, in percent rounded to one decimal.
    pub percentage: f64,
}

/// The figures of the regional admin dashboard for one region.
#[derive(PartialEq, Debug, Clone)]
pub struct RegionalSummary {
    pub region: String,
    pub total_voters: u64,
    pub voted_count: u64,
    pub participation_pct: f64,
    pub leading_party: String,
    pub results: Vec<CandidateResult>,
}

/// One row of the national per-region table.
#[derive(PartialEq, Debug, Clone)]
pub struct RegionRow {
    pub region: String,
    pub total_voters: u64,
    pub voted_count: u64,
    pub participation_pct: f64,
    pub leading_party: String,
}

/// The figures of the national (master) admin dashboard.
#[derive(PartialEq, Debug, Clone)]
pub struct NationalSummary {
    pub seats: Vec<PartySeats>,
    pub total_seats: u64,
    pub leading_party: String,
    pub leading_seats: u64,
    pub leading_share_pct: f64,
    pub total_voters: u64,
    pub voted_count: u64,
    pub average_participation_pct: f64,
    pub regions: Vec<RegionRow>,
}

// ********* Errors **********

/// The two error categories surfaced to the login and voting screens.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ErrorKind {
    /// Malformed or missing input, or a repeated action such as double-voting.
    Validation,
    /// Well-formed input that fails a credential match.
    Auth,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Auth => write!(f, "auth"),
        }
    }
}

/// Errors returned by the identity resolver and the view router.
///
/// None of these are fatal: the session is left unchanged and the current
/// screen redisplays with the error surfaced.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SessionError {
    IdentifierTooShort { length: usize },
    ContactNumberInvalid { length: usize },
    UnknownRegionCode { code: String },
    NoRegionSelected,
    UnknownRegionalAdmin { region: String },
    BadRegionalCredentials { region: String },
    BadNationalCredentials,
    NotOnVoterDashboard,
    UnknownElection { election_id: String },
    UnknownCandidate { election_id: String, candidate_id: String },
    AlreadyVoted { election_id: String },
    DuplicateRegionCode { code: String },
    DuplicateRegionalAdmin { region: String },
    MissingNationalAdmin,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::UnknownRegionalAdmin { .. }
            | SessionError::BadRegionalCredentials { .. }
            | SessionError::BadNationalCredentials => ErrorKind::Auth,
            _ => ErrorKind::Validation,
        }
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::IdentifierTooShort { length } => {
                write!(f, "voter identifier must be at least 10 characters, got {}", length)
            }
            SessionError::ContactNumberInvalid { length } => {
                write!(f, "contact number must be exactly 10 characters, got {}", length)
            }
            SessionError::UnknownRegionCode { code } => {
                write!(f, "no region is registered for code {}", code)
            }
            SessionError::NoRegionSelected => write!(f, "no region selected"),
            SessionError::UnknownRegionalAdmin { region } => {
                write!(f, "no admin is configured for region {}", region)
            }
            SessionError::BadRegionalCredentials { region } => {
                write!(f, "bad admin credentials for region {}", region)
            }
            SessionError::BadNationalCredentials => write!(f, "bad national admin credentials"),
            SessionError::NotOnVoterDashboard => {
                write!(f, "votes can only be cast from the voter dashboard")
            }
            SessionError::UnknownElection { election_id } => {
                write!(f, "unknown election {}", election_id)
            }
            SessionError::UnknownCandidate {
                election_id,
                candidate_id,
            } => write!(
                f,
                "candidate {} is not running in election {}",
                candidate_id, election_id
            ),
            SessionError::AlreadyVoted { election_id } => {
                write!(f, "a vote was already cast in election {}", election_id)
            }
            SessionError::DuplicateRegionCode { code } => {
                write!(f, "region code {} is registered twice", code)
            }
            SessionError::DuplicateRegionalAdmin { region } => {
                write!(f, "region {} has more than one admin entry", region)
            }
            SessionError::MissingNationalAdmin => {
                write!(f, "no national admin credential configured")
            }
        }
    }
}

impl Error for SessionError {}
