use std::fmt;

use serde::{Deserialize, Serialize};

/// Type label of the pre-match lineup announcement.
pub const STARTING_XI: &str = "Starting XI";

/// One normalized match occurrence.
///
/// Fields are read-only once constructed. `team`, `event_type`, `timestamp`
/// and `description` are always present; `player` and the two coordinates are
/// independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootballEvent {
    team: String,
    event_type: String,
    timestamp: String,
    player: Option<String>,
    position_x: Option<f64>,
    position_y: Option<f64>,
    description: String,
}

impl FootballEvent {
    pub fn new(
        team: impl Into<String>,
        event_type: impl Into<String>,
        timestamp: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            team: team.into(),
            event_type: event_type.into(),
            timestamp: timestamp.into(),
            player: None,
            position_x: None,
            position_y: None,
            description: description.into(),
        }
    }

    pub fn with_player(mut self, player: Option<String>) -> Self {
        self.player = player;
        self
    }

    pub fn with_position(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.position_x = x;
        self.position_y = y;
        self
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Canonical `HH:MM:SS.fff` match-clock string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn position_x(&self) -> Option<f64> {
        self.position_x
    }

    pub fn position_y(&self) -> Option<f64> {
        self.position_y
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Well-known type of this event, if its label is one.
    pub fn known_type(&self) -> Option<KnownEventType> {
        KnownEventType::from_label(&self.event_type)
    }
}

struct OptText<'a>(Option<&'a str>);

impl fmt::Display for OptText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(text) => write!(f, "'{}'", text),
            None => f.write_str("None"),
        }
    }
}

struct OptNum(Option<f64>);

impl fmt::Display for OptNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:?}", value),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for FootballEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team='{}' event_type='{}' timestamp='{}' player={} position_x={} position_y={} description='{}'",
            self.team,
            self.event_type,
            self.timestamp,
            OptText(self.player.as_deref()),
            OptNum(self.position_x),
            OptNum(self.position_y),
            self.description,
        )
    }
}

/// Event type labels seen in StatsBomb-style open data.
///
/// Informational only: events keep the raw label and unknown labels are
/// accepted everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownEventType {
    Duel,
    GoalKeeper,
    Pass,
    CameraOff,
    Dispossessed,
    Substitution,
    Clearance,
    PlayerOn,
    FoulCommitted,
    DribbledPast,
    FoulWon,
    TacticalShift,
    InjuryStoppage,
    Shot,
    Pressure,
    Error,
    PlayerOff,
    BadBehaviour,
    Interception,
    Miscontrol,
    Shield,
    HalfStart,
    CameraOn,
    Offside,
    StartingXi,
    BallReceipt,
    Dribble,
    Block,
    HalfEnd,
    BallRecovery,
}

impl KnownEventType {
    pub const ALL: [KnownEventType; 30] = [
        KnownEventType::Duel,
        KnownEventType::GoalKeeper,
        KnownEventType::Pass,
        KnownEventType::CameraOff,
        KnownEventType::Dispossessed,
        KnownEventType::Substitution,
        KnownEventType::Clearance,
        KnownEventType::PlayerOn,
        KnownEventType::FoulCommitted,
        KnownEventType::DribbledPast,
        KnownEventType::FoulWon,
        KnownEventType::TacticalShift,
        KnownEventType::InjuryStoppage,
        KnownEventType::Shot,
        KnownEventType::Pressure,
        KnownEventType::Error,
        KnownEventType::PlayerOff,
        KnownEventType::BadBehaviour,
        KnownEventType::Interception,
        KnownEventType::Miscontrol,
        KnownEventType::Shield,
        KnownEventType::HalfStart,
        KnownEventType::CameraOn,
        KnownEventType::Offside,
        KnownEventType::StartingXi,
        KnownEventType::BallReceipt,
        KnownEventType::Dribble,
        KnownEventType::Block,
        KnownEventType::HalfEnd,
        KnownEventType::BallRecovery,
    ];

    /// Source label, exactly as it appears in the data.
    pub fn label(&self) -> &'static str {
        match self {
            KnownEventType::Duel => "Duel",
            KnownEventType::GoalKeeper => "Goal Keeper",
            KnownEventType::Pass => "Pass",
            // lowercase "off" is how the source spells it
            KnownEventType::CameraOff => "Camera off",
            KnownEventType::Dispossessed => "Dispossessed",
            KnownEventType::Substitution => "Substitution",
            KnownEventType::Clearance => "Clearance",
            KnownEventType::PlayerOn => "Player On",
            KnownEventType::FoulCommitted => "Foul Committed",
            KnownEventType::DribbledPast => "Dribbled Past",
            KnownEventType::FoulWon => "Foul Won",
            KnownEventType::TacticalShift => "Tactical Shift",
            KnownEventType::InjuryStoppage => "Injury Stoppage",
            KnownEventType::Shot => "Shot",
            KnownEventType::Pressure => "Pressure",
            KnownEventType::Error => "Error",
            KnownEventType::PlayerOff => "Player Off",
            KnownEventType::BadBehaviour => "Bad Behaviour",
            KnownEventType::Interception => "Interception",
            KnownEventType::Miscontrol => "Miscontrol",
            KnownEventType::Shield => "Shield",
            KnownEventType::HalfStart => "Half Start",
            KnownEventType::CameraOn => "Camera On",
            KnownEventType::Offside => "Offside",
            KnownEventType::StartingXi => STARTING_XI,
            KnownEventType::BallReceipt => "Ball Receipt*",
            KnownEventType::Dribble => "Dribble",
            KnownEventType::Block => "Block",
            KnownEventType::HalfEnd => "Half End",
            KnownEventType::BallRecovery => "Ball Recovery",
        }
    }

    /// Exact-match lookup; no case folding or trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.label() == label)
    }

    /// Pre-match or administrative announcement rather than an in-play
    /// occurrence.
    pub fn is_administrative(&self) -> bool {
        matches!(self, KnownEventType::StartingXi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pass() -> FootballEvent {
        FootballEvent::new(
            "A",
            "Pass",
            "00:00:25.000",
            "Additional Informations: (height: Ground Pass)",
        )
        .with_player(Some("X".to_string()))
        .with_position(Some(61.0), Some(40.5))
    }

    #[test]
    fn test_accessors() {
        let event = sample_pass();
        assert_eq!(event.team(), "A");
        assert_eq!(event.event_type(), "Pass");
        assert_eq!(event.timestamp(), "00:00:25.000");
        assert_eq!(event.player(), Some("X"));
        assert_eq!(event.position_x(), Some(61.0));
        assert_eq!(event.position_y(), Some(40.5));
        assert_eq!(event.known_type(), Some(KnownEventType::Pass));
    }

    #[test]
    fn test_optional_fields_default_to_absent() {
        let event = FootballEvent::new("B", "Half Start", "00:00:00.000", "Additional Informations: ");
        assert_eq!(event.player(), None);
        assert_eq!(event.position_x(), None);
        assert_eq!(event.position_y(), None);
    }

    #[test]
    fn test_display_renders_every_field() {
        let text = sample_pass().to_string();
        assert_eq!(
            text,
            "team='A' event_type='Pass' timestamp='00:00:25.000' player='X' position_x=61.0 \
             position_y=40.5 description='Additional Informations: (height: Ground Pass)'"
        );

        let bare = FootballEvent::new("B", "Half End", "00:45:00.000", "Additional Informations: ");
        assert!(bare.to_string().contains("player=None position_x=None position_y=None"));
    }

    #[test]
    fn test_label_lookup_is_exact() {
        for kind in KnownEventType::ALL {
            assert_eq!(KnownEventType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(KnownEventType::from_label("starting xi"), None);
        assert_eq!(KnownEventType::from_label("Ball Receipt"), None);
        assert_eq!(KnownEventType::from_label("Camera Off"), None);
    }

    #[test]
    fn test_only_lineup_is_administrative() {
        let admin: Vec<_> =
            KnownEventType::ALL.into_iter().filter(|kind| kind.is_administrative()).collect();
        assert_eq!(admin, vec![KnownEventType::StartingXi]);
    }

    #[test]
    fn test_json_keeps_absent_fields_as_null() {
        let event = FootballEvent::new("A", "Pressure", "00:01:02.300", "Additional Informations: ");
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["player"].is_null());
        assert!(json["position_x"].is_null());
        assert_eq!(json["event_type"], "Pressure");

        let back: FootballEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
