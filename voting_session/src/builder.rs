pub use crate::config::*;
use crate::{App, Directory};

/// A builder for assembling the static application dataset in library use.
///
/// ```
/// use voting_session::builder::Builder;
/// use voting_session::Router;
/// # use voting_session::SessionError;
///
/// let mut builder = Builder::new();
/// builder
///     .region("27", "Maharashtra")
///     .national_admin("master_admin", "india2024");
/// let mut router = Router::new(builder.build()?);
///
/// router.submit_voter_credentials("27AB123456", "9876543210")?;
/// # Ok::<(), SessionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    regions: Vec<RegionEntry>,
    regional_admins: Vec<RegionalAdminCredential>,
    national_admin: Option<NationalAdminCredential>,
    elections: Vec<Election>,
    region_stats: Vec<RegionStats>,
    national_seats: Vec<PartySeats>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Registers one region code. Codes are case-normalized at build time.
    pub fn region(&mut self, code: &str, name: &str) -> &mut Builder {
        self.regions.push(RegionEntry {
            code: code.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn regional_admin(&mut self, region: &str, admin_id: &str, password: &str) -> &mut Builder {
        self.regional_admins.push(RegionalAdminCredential {
            region: region.to_string(),
            admin_id: admin_id.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn national_admin(&mut self, username: &str, password: &str) -> &mut Builder {
        self.national_admin = Some(NationalAdminCredential {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn election(&mut self, election: Election) -> &mut Builder {
        self.elections.push(election);
        self
    }

    pub fn region_stats(&mut self, stats: RegionStats) -> &mut Builder {
        self.region_stats.push(stats);
        self
    }

    pub fn party_seats(&mut self, party: &str, seats: u64) -> &mut Builder {
        self.national_seats.push(PartySeats {
            party: party.to_string(),
            seats,
        });
        self
    }

    /// Validates the accumulated entries and produces the immutable [`App`].
    pub fn build(&self) -> Result<App, SessionError> {
        let national = self
            .national_admin
            .as_ref()
            .ok_or(SessionError::MissingNationalAdmin)?;
        let directory = Directory::assemble(&self.regions, &self.regional_admins, national)?;
        Ok(App::assemble(
            directory,
            self.elections.clone(),
            self.region_stats.clone(),
            self.national_seats.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_a_national_admin() {
        let mut builder = Builder::new();
        builder.region("27", "Maharashtra");
        assert_eq!(
            builder.build().unwrap_err(),
            SessionError::MissingNationalAdmin
        );
    }

    #[test]
    fn duplicate_region_codes_are_rejected() {
        let mut builder = Builder::new();
        builder
            .region("27", "Maharashtra")
            .region("27", "Somewhere Else")
            .national_admin("master_admin", "india2024");
        assert_eq!(
            builder.build().unwrap_err(),
            SessionError::DuplicateRegionCode {
                code: "27".to_string()
            }
        );
    }

    #[test]
    fn duplicate_regional_admins_are_rejected() {
        let mut builder = Builder::new();
        builder
            .region("27", "Maharashtra")
            .regional_admin("Maharashtra", "a", "b")
            .regional_admin("Maharashtra", "c", "d")
            .national_admin("master_admin", "india2024");
        assert_eq!(
            builder.build().unwrap_err(),
            SessionError::DuplicateRegionalAdmin {
                region: "Maharashtra".to_string()
            }
        );
    }
}
