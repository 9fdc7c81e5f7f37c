pub mod clock;
pub mod event;
pub mod match_info;

pub use clock::MatchClock;
pub use event::{FootballEvent, KnownEventType, STARTING_XI};
pub use match_info::{Competition, MatchInfo, Player, Team, LINEUP_SIZE};
