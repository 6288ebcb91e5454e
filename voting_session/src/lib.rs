mod config;
pub mod builder;
pub mod manual;

use log::{debug, info, warn};

use std::collections::HashMap;

pub use crate::config::*;

// **** Private structures ****

/// The outcome of a successful credential resolution: a role and, for the
/// region-scoped roles, the region it applies to.
#[derive(Eq, PartialEq, Debug, Clone)]
struct Identity {
    role: Role,
    region: Option<String>,
}

/// Rounds to one decimal, which is how every percentage of the source
/// datasets is displayed.
fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (part as f64) * 100.0 / (total as f64);
    (raw * 10.0).round() / 10.0
}

// **** Identity resolution ****

/// The immutable directory of regions and credentials.
///
/// This is configuration data supplied at startup, either through the
/// [`builder::Builder`] or assembled by a caller from its own configuration
/// files. Lookups never mutate it.
#[derive(Debug, Clone)]
pub struct Directory {
    // code (2 characters, upper-cased) -> region name
    regions: HashMap<String, String>,
    // region name -> (admin id, password)
    regional_admins: HashMap<String, (String, String)>,
    national_admin: (String, String),
}

impl Directory {
    pub(crate) fn assemble(
        regions: &[RegionEntry],
        admins: &[RegionalAdminCredential],
        national: &NationalAdminCredential,
    ) -> Result<Directory, SessionError> {
        let mut region_map: HashMap<String, String> = HashMap::new();
        for entry in regions.iter() {
            let code = entry.code.to_uppercase();
            if region_map.insert(code, entry.name.clone()).is_some() {
                return Err(SessionError::DuplicateRegionCode {
                    code: entry.code.clone(),
                });
            }
        }
        let mut admin_map: HashMap<String, (String, String)> = HashMap::new();
        for cred in admins.iter() {
            let pair = (cred.admin_id.clone(), cred.password.clone());
            if admin_map.insert(cred.region.clone(), pair).is_some() {
                return Err(SessionError::DuplicateRegionalAdmin {
                    region: cred.region.clone(),
                });
            }
        }
        Ok(Directory {
            regions: region_map,
            regional_admins: admin_map,
            national_admin: (national.username.clone(), national.password.clone()),
        })
    }

    /// The region name registered for a 2-character code, if any.
    /// The lookup is case-normalized.
    pub fn region_for_code(&self, code: &str) -> Option<&str> {
        self.regions.get(&code.to_uppercase()).map(|s| s.as_str())
    }

    /// Voter path: syntactic checks on the identifier and contact number,
    /// then region derivation from the identifier prefix.
    ///
    /// No credential store is consulted: any syntactically valid pair with a
    /// known region prefix signs in. This is the documented demo behavior.
    fn resolve_voter(&self, identifier: &str, contact: &str) -> Result<Identity, SessionError> {
        if identifier.chars().count() < 10 {
            return Err(SessionError::IdentifierTooShort {
                length: identifier.chars().count(),
            });
        }
        if contact.chars().count() != 10 {
            return Err(SessionError::ContactNumberInvalid {
                length: contact.chars().count(),
            });
        }
        let code: String = identifier.chars().take(2).collect();
        debug!("resolve_voter: deriving region from code {:?}", code);
        match self.region_for_code(&code) {
            Some(region) => Ok(Identity {
                role: Role::Voter,
                region: Some(region.to_string()),
            }),
            None => Err(SessionError::UnknownRegionCode { code }),
        }
    }

    /// Regional admin path: the pair must match the configured entry for the
    /// selected region exactly. Correct credentials against the wrong region
    /// fail like any other mismatch.
    fn resolve_regional_admin(
        &self,
        region: &str,
        admin_id: &str,
        password: &str,
    ) -> Result<Identity, SessionError> {
        if region.is_empty() {
            return Err(SessionError::NoRegionSelected);
        }
        let configured = self
            .regional_admins
            .get(region)
            .ok_or(SessionError::UnknownRegionalAdmin {
                region: region.to_string(),
            })?;
        // Exact string equality by design: this is a non-production demo and
        // must not be reused as an auth strategy.
        if configured.0 != admin_id || configured.1 != password {
            return Err(SessionError::BadRegionalCredentials {
                region: region.to_string(),
            });
        }
        Ok(Identity {
            role: Role::RegionalAdmin,
            region: Some(region.to_string()),
        })
    }

    /// National admin path: exact match on both constants.
    fn resolve_national_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, SessionError> {
        if self.national_admin.0 != username || self.national_admin.1 != password {
            return Err(SessionError::BadNationalCredentials);
        }
        Ok(Identity {
            role: Role::NationalAdmin,
            region: None,
        })
    }
}

// **** Datasets and analytics ****

/// The full static dataset of the application: directory, elections and the
/// mock result figures. Swapping the fixture swaps the whole demo content
/// without touching any control flow.
#[derive(Debug, Clone)]
pub struct App {
    directory: Directory,
    elections: Vec<Election>,
    region_stats: Vec<RegionStats>,
    national_seats: Vec<PartySeats>,
}

impl App {
    pub(crate) fn assemble(
        directory: Directory,
        elections: Vec<Election>,
        region_stats: Vec<RegionStats>,
        national_seats: Vec<PartySeats>,
    ) -> App {
        App {
            directory,
            elections,
            region_stats,
            national_seats,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The elections offered to a voter of the given region: national
    /// elections plus the ones scoped to that region.
    pub fn elections_for(&self, region: &str) -> Vec<&Election> {
        self.elections
            .iter()
            .filter(|e| match e.region.as_deref() {
                None => true,
                Some(r) => r == region,
            })
            .collect()
    }

    pub fn election(&self, election_id: &str) -> Option<&Election> {
        self.elections.iter().find(|e| e.id == election_id)
    }

    /// The regional dashboard figures for one region, if stats are loaded
    /// for it.
    pub fn regional_summary(&self, region: &str) -> Option<RegionalSummary> {
        let stats = self.region_stats.iter().find(|s| s.region == region)?;
        let total_votes: u64 = stats.results.iter().map(|r| r.votes).sum();
        let results: Vec<CandidateResult> = stats
            .results
            .iter()
            .map(|r| CandidateResult {
                name: r.name.clone(),
                party: r.party.clone(),
                votes: r.votes,
                percentage: percent(r.votes, total_votes),
            })
            .collect();
        info!(
            "regional_summary: region {:?}, {} candidates, {} votes",
            region,
            results.len(),
            total_votes
        );
        Some(RegionalSummary {
            region: stats.region.clone(),
            total_voters: stats.total_voters,
            voted_count: stats.voted_count,
            participation_pct: percent(stats.voted_count, stats.total_voters),
            leading_party: stats.leading_party.clone(),
            results,
        })
    }

    /// The national dashboard figures, aggregated over every loaded region.
    pub fn national_summary(&self) -> NationalSummary {
        let total_seats: u64 = self.national_seats.iter().map(|p| p.seats).sum();
        // The configured results list the leading party first; aggregate
        // buckets such as "Others" come last, so a max over seats would be
        // wrong.
        let leading = self.national_seats.first().cloned().unwrap_or(PartySeats {
            party: "".to_string(),
            seats: 0,
        });
        let total_voters: u64 = self.region_stats.iter().map(|s| s.total_voters).sum();
        let voted_count: u64 = self.region_stats.iter().map(|s| s.voted_count).sum();
        let regions: Vec<RegionRow> = self
            .region_stats
            .iter()
            .map(|s| RegionRow {
                region: s.region.clone(),
                total_voters: s.total_voters,
                voted_count: s.voted_count,
                participation_pct: percent(s.voted_count, s.total_voters),
                leading_party: s.leading_party.clone(),
            })
            .collect();
        let average_participation_pct = if regions.is_empty() {
            0.0
        } else {
            let sum: f64 = regions.iter().map(|r| r.participation_pct).sum();
            ((sum / regions.len() as f64) * 10.0).round() / 10.0
        };
        info!(
            "national_summary: {} regions, {} seats, leading party {:?}",
            regions.len(),
            total_seats,
            leading.party
        );
        NationalSummary {
            seats: self.national_seats.clone(),
            total_seats,
            leading_party: leading.party.clone(),
            leading_seats: leading.seats,
            leading_share_pct: percent(leading.seats, total_seats),
            total_voters,
            voted_count,
            average_participation_pct,
            regions,
        }
    }
}

// **** View routing ****

/// The four mutually exclusive screens.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum View {
    Login,
    VoterDashboard { region: String },
    RegionalAdminDashboard { region: String },
    NationalAdminDashboard,
}

impl View {
    /// The camel-cased screen name, as used by the transcript output.
    pub fn name(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::VoterDashboard { .. } => "voterDashboard",
            View::RegionalAdminDashboard { .. } => "regionalAdminDashboard",
            View::NationalAdminDashboard => "nationalAdminDashboard",
        }
    }
}

/// The view router: owns the datasets and the single session, and maps every
/// UI event to the next state.
///
/// The machine is synchronous. A failed submission leaves the session
/// untouched; logout always resets it.
#[derive(Debug, Clone)]
pub struct Router {
    app: App,
    session: Session,
}

impl Router {
    pub fn new(app: App) -> Router {
        Router {
            app,
            session: Session::logged_out(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The screen currently selected by the session state.
    pub fn current_view(&self) -> View {
        match (self.session.role(), self.session.region()) {
            (Role::Voter, Some(region)) => View::VoterDashboard {
                region: region.to_string(),
            },
            (Role::RegionalAdmin, Some(region)) => View::RegionalAdminDashboard {
                region: region.to_string(),
            },
            (Role::NationalAdmin, _) => View::NationalAdminDashboard,
            _ => View::Login,
        }
    }

    pub fn submit_voter_credentials(
        &mut self,
        identifier: &str,
        contact: &str,
    ) -> Result<&Session, SessionError> {
        let identity = self.app.directory.resolve_voter(identifier, contact)?;
        // resolve_voter always returns a region for the voter role.
        let region = identity.region.unwrap_or_default();
        info!("voter login accepted, region {:?}", region);
        self.session = Session::voter(region);
        Ok(&self.session)
    }

    pub fn submit_regional_admin_credentials(
        &mut self,
        region: &str,
        admin_id: &str,
        password: &str,
    ) -> Result<&Session, SessionError> {
        let identity = self
            .app
            .directory
            .resolve_regional_admin(region, admin_id, password)?;
        let region = identity.region.unwrap_or_default();
        info!("regional admin login accepted, region {:?}", region);
        self.session = Session::regional_admin(region);
        Ok(&self.session)
    }

    pub fn submit_national_admin_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<&Session, SessionError> {
        self.app
            .directory
            .resolve_national_admin(username, password)?;
        info!("national admin login accepted");
        self.session = Session::national_admin();
        Ok(&self.session)
    }

    /// Always resets to the login screen with a pristine session.
    pub fn logout(&mut self) -> &Session {
        info!("logout from role {}", self.session.role());
        self.session = Session::logged_out();
        &self.session
    }

    /// Records a vote for the session. Only valid from the voter dashboard,
    /// for a known election/candidate pair, at most once per election.
    pub fn cast_vote(
        &mut self,
        election_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, SessionError> {
        let region = match self.current_view() {
            View::VoterDashboard { region } => region,
            _ => return Err(SessionError::NotOnVoterDashboard),
        };
        let election = self
            .app
            .election(election_id)
            .ok_or(SessionError::UnknownElection {
                election_id: election_id.to_string(),
            })?;
        if !election.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(SessionError::UnknownCandidate {
                election_id: election_id.to_string(),
                candidate_id: candidate_id.to_string(),
            });
        }
        if self.session.has_voted(election_id) {
            warn!("cast_vote: duplicate vote rejected for {:?}", election_id);
            return Err(SessionError::AlreadyVoted {
                election_id: election_id.to_string(),
            });
        }
        self.session.record_vote(election_id.to_string());
        let digest = sha256::digest(format!("{}/{}/{}", region, election_id, candidate_id));
        info!(
            "cast_vote: recorded vote in {:?} for {:?}",
            election_id, candidate_id
        );
        Ok(VoteReceipt {
            election_id: election_id.to_string(),
            candidate_id: candidate_id.to_string(),
            digest,
        })
    }

    /// The voter dashboard header figures, when a voter is signed in.
    pub fn voter_summary(&self) -> Option<VoterSummary> {
        let region = match self.current_view() {
            View::VoterDashboard { region } => region,
            _ => return None,
        };
        let available = self.app.elections_for(&region);
        let votes_cast = available
            .iter()
            .filter(|e| self.session.has_voted(&e.id))
            .count();
        Some(VoterSummary {
            region,
            total_elections: available.len(),
            votes_cast,
            pending: available.len() - votes_cast,
            all_done: !available.is_empty() && votes_cast == available.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::Builder;
    use crate::*;

    fn demo_app() -> App {
        let mut builder = Builder::new();
        builder
            .region("27", "Maharashtra")
            .region("09", "Uttar Pradesh")
            .region("33", "Tamil Nadu")
            .regional_admin("Maharashtra", "EC-MH-001", "shivneri#27")
            .regional_admin("Uttar Pradesh", "EC-UP-001", "sangam#09")
            .national_admin("master_admin", "india2024");
        builder.election(Election {
            id: "lok-sabha-2024".to_string(),
            title: "Lok Sabha General Election 2024".to_string(),
            description: "National parliamentary election".to_string(),
            candidates: vec![
                Candidate {
                    id: "cand-1".to_string(),
                    name: "Asha Patil".to_string(),
                    party: "BJP".to_string(),
                },
                Candidate {
                    id: "cand-2".to_string(),
                    name: "Ravi Deshmukh".to_string(),
                    party: "Congress".to_string(),
                },
            ],
            deadline: None,
            category: Some("Federal".to_string()),
            region: None,
        });
        builder.election(Election {
            id: "vidhan-sabha-mh".to_string(),
            title: "Maharashtra Assembly".to_string(),
            description: "State assembly election".to_string(),
            candidates: vec![Candidate {
                id: "cand-3".to_string(),
                name: "Sunita Joshi".to_string(),
                party: "NCP".to_string(),
            }],
            deadline: None,
            category: Some("State".to_string()),
            region: Some("Maharashtra".to_string()),
        });
        builder.region_stats(RegionStats {
            region: "Maharashtra".to_string(),
            total_voters: 45000,
            voted_count: 31500,
            leading_party: "Shiv Sena".to_string(),
            results: vec![
                CandidateTally {
                    name: "Eknath Shinde".to_string(),
                    party: "Shiv Sena".to_string(),
                    votes: 14175,
                },
                CandidateTally {
                    name: "Uddhav Thackeray".to_string(),
                    party: "Shiv Sena (UBT)".to_string(),
                    votes: 11025,
                },
                CandidateTally {
                    name: "Devendra Fadnavis".to_string(),
                    party: "BJP".to_string(),
                    votes: 6300,
                },
            ],
        });
        builder.region_stats(RegionStats {
            region: "Uttar Pradesh".to_string(),
            total_voters: 82000,
            voted_count: 57400,
            leading_party: "BJP".to_string(),
            results: vec![],
        });
        builder.party_seats("BJP", 156);
        builder.party_seats("Congress", 89);
        builder.party_seats("Others", 298);
        builder.build().unwrap()
    }

    #[test]
    fn voter_login_derives_region_from_prefix() {
        let mut router = Router::new(demo_app());
        let session = router
            .submit_voter_credentials("27AB123456", "9876543210")
            .unwrap();
        assert_eq!(session.role(), Role::Voter);
        assert_eq!(session.region(), Some("Maharashtra"));
        assert_eq!(
            router.current_view(),
            View::VoterDashboard {
                region: "Maharashtra".to_string()
            }
        );
    }

    #[test]
    fn voter_login_prefix_is_case_normalized() {
        // The registry lookup is case-normalized, so a code registered in
        // lower case still matches an upper-cased identifier prefix.
        let mut builder = Builder::new();
        builder
            .region("mh", "Maharashtra")
            .national_admin("master_admin", "india2024");
        let app = builder.build().unwrap();
        let mut router = Router::new(app);
        let session = router
            .submit_voter_credentials("MH12345678", "9876543210")
            .unwrap();
        assert_eq!(session.region(), Some("Maharashtra"));
    }

    #[test]
    fn short_identifier_is_rejected() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_voter_credentials("27AB12345", "9876543210")
            .unwrap_err();
        assert_eq!(err, SessionError::IdentifierTooShort { length: 9 });
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(router.current_view(), View::Login);
    }

    #[test]
    fn bad_contact_number_is_rejected() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_voter_credentials("27AB123456", "98765")
            .unwrap_err();
        assert_eq!(err, SessionError::ContactNumberInvalid { length: 5 });
        assert_eq!(router.session().role(), Role::Unauthenticated);
    }

    #[test]
    fn unknown_region_code_is_rejected_and_session_unchanged() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_voter_credentials("99ZZ000000", "9876543210")
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownRegionCode {
                code: "99".to_string()
            }
        );
        assert_eq!(router.session().role(), Role::Unauthenticated);
        assert_eq!(router.session().region(), None);
    }

    #[test]
    fn regional_admin_exact_match_succeeds() {
        let mut router = Router::new(demo_app());
        let session = router
            .submit_regional_admin_credentials("Maharashtra", "EC-MH-001", "shivneri#27")
            .unwrap();
        assert_eq!(session.role(), Role::RegionalAdmin);
        assert_eq!(session.region(), Some("Maharashtra"));
    }

    #[test]
    fn regional_admin_wrong_region_is_auth_error() {
        let mut router = Router::new(demo_app());
        // Valid credentials, but for Maharashtra, not Uttar Pradesh.
        let err = router
            .submit_regional_admin_credentials("Uttar Pradesh", "EC-MH-001", "shivneri#27")
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::BadRegionalCredentials {
                region: "Uttar Pradesh".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Auth);
    }

    #[test]
    fn regional_admin_unconfigured_region_is_auth_error() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_regional_admin_credentials("Tamil Nadu", "EC-TN-001", "whatever")
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownRegionalAdmin {
                region: "Tamil Nadu".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Auth);
    }

    #[test]
    fn regional_admin_empty_region_is_validation_error() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_regional_admin_credentials("", "EC-MH-001", "shivneri#27")
            .unwrap_err();
        assert_eq!(err, SessionError::NoRegionSelected);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn national_admin_constants() {
        let mut router = Router::new(demo_app());
        let err = router
            .submit_national_admin_credentials("master_admin", "wrong")
            .unwrap_err();
        assert_eq!(err, SessionError::BadNationalCredentials);
        assert_eq!(router.current_view(), View::Login);

        let session = router
            .submit_national_admin_credentials("master_admin", "india2024")
            .unwrap();
        assert_eq!(session.role(), Role::NationalAdmin);
        assert_eq!(session.region(), None);
        assert_eq!(router.current_view(), View::NationalAdminDashboard);
    }

    #[test]
    fn logout_clears_role_and_region_from_any_state() {
        let mut router = Router::new(demo_app());
        router
            .submit_regional_admin_credentials("Maharashtra", "EC-MH-001", "shivneri#27")
            .unwrap();
        let session = router.logout();
        assert_eq!(session.role(), Role::Unauthenticated);
        assert_eq!(session.region(), None);
        assert_eq!(router.current_view(), View::Login);

        router
            .submit_national_admin_credentials("master_admin", "india2024")
            .unwrap();
        router.logout();
        assert_eq!(router.session().region(), None);
    }

    #[test]
    fn cast_vote_requires_voter_dashboard() {
        let mut router = Router::new(demo_app());
        let err = router.cast_vote("lok-sabha-2024", "cand-1").unwrap_err();
        assert_eq!(err, SessionError::NotOnVoterDashboard);

        router
            .submit_national_admin_credentials("master_admin", "india2024")
            .unwrap();
        let err = router.cast_vote("lok-sabha-2024", "cand-1").unwrap_err();
        assert_eq!(err, SessionError::NotOnVoterDashboard);
    }

    #[test]
    fn cast_vote_checks_election_and_candidate() {
        let mut router = Router::new(demo_app());
        router
            .submit_voter_credentials("27AB123456", "9876543210")
            .unwrap();
        let err = router.cast_vote("panchayat-2024", "cand-1").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownElection {
                election_id: "panchayat-2024".to_string()
            }
        );
        let err = router.cast_vote("lok-sabha-2024", "cand-99").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownCandidate {
                election_id: "lok-sabha-2024".to_string(),
                candidate_id: "cand-99".to_string()
            }
        );
    }

    #[test]
    fn cast_vote_is_idempotently_rejected_on_repeat() {
        let mut router = Router::new(demo_app());
        router
            .submit_voter_credentials("27AB123456", "9876543210")
            .unwrap();
        let receipt = router.cast_vote("lok-sabha-2024", "cand-1").unwrap();
        assert_eq!(receipt.election_id, "lok-sabha-2024");
        assert_eq!(receipt.digest.len(), 64);

        // A second vote in the same election is rejected, whatever the
        // candidate, and the completed set does not shrink.
        let err = router.cast_vote("lok-sabha-2024", "cand-2").unwrap_err();
        assert_eq!(
            err,
            SessionError::AlreadyVoted {
                election_id: "lok-sabha-2024".to_string()
            }
        );
        let completed: Vec<&str> = router.session().completed_elections().collect();
        assert_eq!(completed, vec!["lok-sabha-2024"]);
    }

    #[test]
    fn voter_summary_tracks_progress() {
        let mut router = Router::new(demo_app());
        assert!(router.voter_summary().is_none());

        router
            .submit_voter_credentials("27AB123456", "9876543210")
            .unwrap();
        // National election + the Maharashtra one.
        let summary = router.voter_summary().unwrap();
        assert_eq!(summary.total_elections, 2);
        assert_eq!(summary.votes_cast, 0);
        assert_eq!(summary.pending, 2);
        assert!(!summary.all_done);

        router.cast_vote("lok-sabha-2024", "cand-1").unwrap();
        router.cast_vote("vidhan-sabha-mh", "cand-3").unwrap();
        let summary = router.voter_summary().unwrap();
        assert_eq!(summary.votes_cast, 2);
        assert!(summary.all_done);
    }

    #[test]
    fn elections_are_scoped_by_region() {
        let app = demo_app();
        let mh: Vec<&str> = app
            .elections_for("Maharashtra")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(mh, vec!["lok-sabha-2024", "vidhan-sabha-mh"]);
        let up: Vec<&str> = app
            .elections_for("Uttar Pradesh")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(up, vec!["lok-sabha-2024"]);
    }

    #[test]
    fn regional_summary_computes_percentages() {
        let app = demo_app();
        let summary = app.regional_summary("Maharashtra").unwrap();
        assert_eq!(summary.total_voters, 45000);
        assert_eq!(summary.voted_count, 31500);
        assert_eq!(summary.participation_pct, 70.0);
        assert_eq!(summary.leading_party, "Shiv Sena");
        let pcts: Vec<f64> = summary.results.iter().map(|r| r.percentage).collect();
        assert_eq!(pcts, vec![45.0, 35.0, 20.0]);

        assert!(app.regional_summary("Kerala").is_none());
    }

    #[test]
    fn national_summary_aggregates_regions() {
        let app = demo_app();
        let summary = app.national_summary();
        assert_eq!(summary.total_seats, 543);
        assert_eq!(summary.leading_party, "BJP");
        assert_eq!(summary.leading_seats, 156);
        assert_eq!(summary.leading_share_pct, 28.7);
        assert_eq!(summary.total_voters, 127000);
        assert_eq!(summary.voted_count, 88900);
        assert_eq!(summary.average_participation_pct, 70.0);
        assert_eq!(summary.regions.len(), 2);
    }

    #[test]
    fn receipt_digest_is_deterministic() {
        let app = demo_app();
        let mut r1 = Router::new(app.clone());
        let mut r2 = Router::new(app);
        r1.submit_voter_credentials("27AB123456", "9876543210")
            .unwrap();
        r2.submit_voter_credentials("27XY999999", "0123456789")
            .unwrap();
        let a = r1.cast_vote("lok-sabha-2024", "cand-1").unwrap();
        let b = r2.cast_vote("lok-sabha-2024", "cand-1").unwrap();
        // Same region, election and candidate: same acknowledgment token.
        assert_eq!(a.digest, b.digest);
    }
}
