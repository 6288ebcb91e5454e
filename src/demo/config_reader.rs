use crate::demo::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoRegion {
    pub code: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoRegionalAdmin {
    pub region: String,
    #[serde(rename = "adminId")]
    pub admin_id: String,
    pub password: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoNationalAdmin {
    pub username: String,
    pub password: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoCandidate {
    pub id: String,
    pub name: String,
    pub party: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoElection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub candidates: Vec<DemoCandidate>,
    pub deadline: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoTally {
    pub name: String,
    pub party: String,
    pub votes: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoRegionStats {
    pub region: String,
    #[serde(rename = "totalVoters")]
    pub total_voters: u64,
    #[serde(rename = "votedCount")]
    pub voted_count: u64,
    #[serde(rename = "leadingParty")]
    pub leading_party: String,
    #[serde(default)]
    pub results: Vec<DemoTally>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoPartySeats {
    pub party: String,
    pub seats: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub title: String,
    pub regions: Vec<DemoRegion>,
    #[serde(rename = "regionalAdmins")]
    pub regional_admins: Vec<DemoRegionalAdmin>,
    #[serde(rename = "nationalAdmin")]
    pub national_admin: DemoNationalAdmin,
    pub elections: Vec<DemoElection>,
    #[serde(rename = "regionStats")]
    pub region_stats: Vec<DemoRegionStats>,
    #[serde(rename = "nationalResults")]
    pub national_results: Vec<DemoPartySeats>,
}

/// One UI event of a scenario. The `action` field selects the event kind;
/// the other fields are only read for the kinds that need them.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoEvent {
    pub action: String,
    #[serde(rename = "voterId")]
    pub voter_id: Option<String>,
    pub mobile: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "adminId")]
    pub admin_id: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub election: Option<String>,
    pub candidate: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DemoScenario {
    pub events: Vec<DemoEvent>,
}

pub fn read_config(path: &str) -> DemoResult<DemoConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
        path: path.to_string(),
    })
}

pub fn read_scenario(path: &str) -> DemoResult<DemoScenario> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
        path: path.to_string(),
    })
}
