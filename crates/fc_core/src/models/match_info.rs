//! Match metadata: competition, teams with their starting lineups, date.
//!
//! Loaded from a YAML document with the top-level keys `HOME_TEAM`,
//! `AWAY_TEAM`, `COMPETITION` and `DATE`. Loading is explicit: call
//! [`MatchInfo::load`] again to pick up changes to the file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::MatchInfoError;

/// Players per starting lineup.
pub const LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub logo: String,
    pub lineup: Vec<Player>,
}

impl Team {
    /// Build a team, rejecting lineups that are not exactly eleven players
    /// with distinct jersey numbers.
    pub fn new(
        name: impl Into<String>,
        logo: impl Into<String>,
        lineup: Vec<Player>,
    ) -> Result<Self, MatchInfoError> {
        let team = Self { name: name.into(), logo: logo.into(), lineup };
        team.validate()?;
        Ok(team)
    }

    pub fn validate(&self) -> Result<(), MatchInfoError> {
        if self.lineup.len() != LINEUP_SIZE {
            return Err(self.invalid(format!(
                "expected {} players, found {}",
                LINEUP_SIZE,
                self.lineup.len()
            )));
        }

        let mut seen = HashSet::with_capacity(LINEUP_SIZE);
        for player in &self.lineup {
            if !seen.insert(player.number) {
                return Err(self.invalid(format!("jersey number {} is used twice", player.number)));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> MatchInfoError {
        MatchInfoError::InvalidLineup { team: self.name.clone(), reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    pub competition: Competition,
    pub home_team: Team,
    pub away_team: Team,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
struct RawMatchInfo {
    #[serde(rename = "HOME_TEAM")]
    home_team: RawTeam,
    #[serde(rename = "AWAY_TEAM")]
    away_team: RawTeam,
    #[serde(rename = "COMPETITION")]
    competition: Competition,
    #[serde(rename = "DATE")]
    date: NaiveDate,
}

#[derive(Deserialize)]
struct RawTeam {
    name: String,
    logo: String,
    /// jersey number -> player name, in document order
    lineup: Mapping,
}

impl RawTeam {
    fn into_team(self) -> Result<Team, MatchInfoError> {
        let mut lineup = Vec::with_capacity(self.lineup.len());
        for (number, name) in &self.lineup {
            let number = match number {
                Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
                _ => None,
            };
            let (Some(number), Value::String(name)) = (number, name) else {
                return Err(MatchInfoError::InvalidLineup {
                    team: self.name,
                    reason: "lineup entries must map a jersey number to a player name".into(),
                });
            };
            lineup.push(Player { number, name: name.clone() });
        }
        Team::new(self.name, self.logo, lineup)
    }
}

impl MatchInfo {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MatchInfoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let info = Self::from_yaml_str(&text)?;
        tracing::info!(
            "Loaded match info from {}: {} vs {} ({})",
            path.display(),
            info.home_team.name,
            info.away_team.name,
            info.date
        );
        Ok(info)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, MatchInfoError> {
        let raw: RawMatchInfo = serde_yaml::from_str(text)?;
        Ok(Self {
            competition: raw.competition,
            home_team: raw.home_team.into_team()?,
            away_team: raw.away_team.into_team()?,
            date: raw.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn numbered_lineup() -> Vec<Player> {
        (1..=11).map(|n| Player { number: n, name: format!("Player {}", n) }).collect()
    }

    fn lineup_yaml(indent: &str) -> String {
        (1..=11).map(|n| format!("{indent}{n}: Player {n}\n")).collect()
    }

    fn match_yaml() -> String {
        format!(
            "HOME_TEAM:\n  name: Chelsea LFC\n  logo: https://example.com/chelsea.png\n  lineup:\n{home}\
             AWAY_TEAM:\n  name: Manchester City WFC\n  logo: https://example.com/city.png\n  lineup:\n{away}\
             COMPETITION:\n  name: FA Women's Super League\n  logo: https://example.com/wsl.png\n\
             DATE: 2024-11-11\n",
            home = lineup_yaml("    "),
            away = lineup_yaml("    "),
        )
    }

    #[test]
    fn test_team_creation() {
        let team = Team::new("Chelsea LFC", "https://example.com/logo.png", numbered_lineup()).unwrap();
        assert_eq!(team.name, "Chelsea LFC");
        assert_eq!(team.lineup.len(), 11);
    }

    #[test]
    fn test_short_lineup_is_rejected() {
        let lineup = vec![Player { number: 1, name: "Goalkeeper".into() }];
        let err = Team::new("Manchester City WFC", "https://example.com/logo.png", lineup).unwrap_err();
        match err {
            MatchInfoError::InvalidLineup { team, reason } => {
                assert_eq!(team, "Manchester City WFC");
                assert!(reason.contains("expected 11 players, found 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_jersey_is_rejected() {
        let mut lineup = numbered_lineup();
        lineup[10].number = 10;
        assert!(matches!(
            Team::new("Dupes", "logo", lineup),
            Err(MatchInfoError::InvalidLineup { .. })
        ));
    }

    #[test]
    fn test_parse_full_document() {
        let info = MatchInfo::from_yaml_str(&match_yaml()).unwrap();
        assert_eq!(info.date, NaiveDate::from_ymd_opt(2024, 11, 11).unwrap());
        assert_eq!(info.competition.name, "FA Women's Super League");
        assert_eq!(info.home_team.name, "Chelsea LFC");
        assert_eq!(info.away_team.lineup.len(), 11);
        assert_eq!(info.home_team.lineup[0], Player { number: 1, name: "Player 1".into() });
        assert_eq!(info.home_team.lineup[10].number, 11);
    }

    #[test]
    fn test_missing_section_is_a_parse_error() {
        let text = match_yaml().replace("COMPETITION:", "TOURNAMENT:");
        assert!(matches!(MatchInfo::from_yaml_str(&text), Err(MatchInfoError::Parse(_))));
    }

    #[test]
    fn test_bad_date_is_a_parse_error() {
        let text = match_yaml().replace("2024-11-11", "11/11/2024");
        assert!(matches!(MatchInfo::from_yaml_str(&text), Err(MatchInfoError::Parse(_))));
    }

    #[test]
    fn test_non_numeric_jersey_is_rejected() {
        let text = match_yaml().replacen("    1: Player 1", "    GK: Player 1", 1);
        assert!(matches!(
            MatchInfo::from_yaml_str(&text),
            Err(MatchInfoError::InvalidLineup { .. })
        ));
    }

    #[test]
    fn test_load_from_file_and_reload() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(match_yaml().as_bytes()).unwrap();

        let first = MatchInfo::load(file.path()).unwrap();
        let second = MatchInfo::load(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_fixture_keeps_document_order() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/match_info.yaml");
        let info = MatchInfo::load(path).unwrap();
        assert_eq!(info.home_team.lineup[0], Player { number: 30, name: "Ann-Katrin Berger".into() });
        assert_eq!(info.away_team.lineup[10].name, "Ellen White");
        assert_eq!(info.date.to_string(), "2021-03-14");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MatchInfo::load(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(MatchInfoError::Io(_))));
    }
}
