/*!

This is the long-form manual for `voting_session` and the `matdaan` runner.

`voting_session` models the contract-bearing core of a demonstration
electronic-voting front end: credential resolution for three role tiers
(voter, regional admin, national admin), a four-screen view router, one-shot
vote casting, and the analytics figures displayed on the admin dashboards.
Everything is synchronous and in-memory; there is no persistence, no network
protocol and no real authentication. Credentials are compared with plain
string equality on purpose; do not reuse any of this for production
authentication.

## Roles and screens

| Screen | Reached by | Region-scoped |
|---|---|---|
| `login` | initial state, logout, any failed submission | no |
| `voterDashboard` | voter credential submission | yes |
| `regionalAdminDashboard` | regional admin submission | yes |
| `nationalAdminDashboard` | national admin submission | no |

A voter signs in with an identifier of at least 10 characters and a
10-character contact number. The first two characters of the identifier are
looked up (case-normalized) in the region registry to derive the voter's
region; an unknown prefix rejects the login. No password store is consulted.

A regional admin selects a region and submits an id/password pair that must
exactly match the pair configured for that region. The national admin submits
the fixed master pair.

## Fixture configuration (JSON, camel-cased)

The `matdaan` binary loads all static data from one JSON file:

```json
{
  "title": "General Election 2024",
  "regions": [ { "code": "27", "name": "Maharashtra" } ],
  "regionalAdmins": [
    { "region": "Maharashtra", "adminId": "EC-MH-001", "password": "shivneri#27" }
  ],
  "nationalAdmin": { "username": "master_admin", "password": "india2024" },
  "elections": [
    {
      "id": "lok-sabha-2024",
      "title": "Lok Sabha General Election 2024",
      "description": "National parliamentary election",
      "category": "Federal",
      "deadline": "2024-11-05",
      "candidates": [
        { "id": "cand-1", "name": "Asha Patil", "party": "BJP" }
      ]
    }
  ],
  "regionStats": [
    {
      "region": "Maharashtra",
      "totalVoters": 45000,
      "votedCount": 31500,
      "leadingParty": "Shiv Sena",
      "results": [
        { "name": "Eknath Shinde", "party": "Shiv Sena", "votes": 14175 }
      ]
    }
  ],
  "nationalResults": [ { "party": "BJP", "seats": 156 } ]
}
```

An election may carry an optional `"region"` field; if present the election is
only offered to voters of that region, otherwise it is national.

## Scenarios

A scenario file is an ordered list of UI events that the runner replays
against a fresh session:

```json
{
  "events": [
    { "action": "voterLogin", "voterId": "27AB123456", "mobile": "9876543210" },
    { "action": "viewDashboard" },
    { "action": "castVote", "election": "lok-sabha-2024", "candidate": "cand-1" },
    { "action": "logout" },
    { "action": "regionalAdminLogin", "region": "Maharashtra",
      "adminId": "EC-MH-001", "password": "shivneri#27" },
    { "action": "nationalAdminLogin", "username": "master_admin",
      "password": "india2024" }
  ]
}
```

Every event produces one transcript entry: accepted events record the
resulting screen (and receipt or dashboard figures where applicable), rejected
events record the error category (`validation` or `auth`) and message while
leaving the session untouched. The pretty-printed transcript can be compared
against a reference file with the `--reference` flag.

*/
