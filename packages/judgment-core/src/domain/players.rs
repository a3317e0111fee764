//! Player roster types and start-of-game roster validation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Display palette handed out to players in seat order.
pub const PLAYER_COLORS: [&str; MAX_PLAYERS] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1",
];

/// Stable player identifier, unique within a game.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh, globally unique id.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Roster entry supplied when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Opaque display identifier.
    pub color: String,
}

impl NewPlayer {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Entry for the given seat with a generated id and the seat's palette color.
    pub fn for_seat(seat: usize, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            color: color_for_seat(seat).to_string(),
        }
    }
}

/// Palette color for a 0-based seat, wrapping past the palette length.
pub fn color_for_seat(seat: usize) -> &'static str {
    PLAYER_COLORS[seat % PLAYER_COLORS.len()]
}

/// `"Player 1"..="Player n"` with palette colors and generated ids.
pub fn default_roster(n: usize) -> Vec<NewPlayer> {
    (0..n)
        .map(|seat| NewPlayer::for_seat(seat, format!("Player {}", seat + 1)))
        .collect()
}

/// Append the next default seat ("Player n+1", next palette color).
pub fn add_seat(roster: &mut Vec<NewPlayer>) -> Result<&NewPlayer, DomainError> {
    if roster.len() >= MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            format!("a game seats at most {MAX_PLAYERS} players"),
        ));
    }
    let seat = roster.len();
    roster.push(NewPlayer::for_seat(seat, format!("Player {}", seat + 1)));
    Ok(&roster[seat])
}

/// Remove a seat by id; the roster never drops below the minimum.
pub fn remove_seat(roster: &mut Vec<NewPlayer>, id: &PlayerId) -> Result<NewPlayer, DomainError> {
    let idx = seat_of(roster, id)?;
    if roster.len() <= MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooFewPlayers,
            format!("a game needs at least {MIN_PLAYERS} players"),
        ));
    }
    Ok(roster.remove(idx))
}

/// Rename a seat. Blank names are allowed while editing and rejected at start.
pub fn rename_seat(
    roster: &mut [NewPlayer],
    id: &PlayerId,
    name: impl Into<String>,
) -> Result<(), DomainError> {
    let idx = seat_of(roster, id)?;
    roster[idx].name = name.into();
    Ok(())
}

fn seat_of(roster: &[NewPlayer], id: &PlayerId) -> Result<usize, DomainError> {
    roster.iter().position(|p| &p.id == id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!("no seat for player '{id}'"),
        )
    })
}

/// Check the start-game preconditions for a roster.
pub fn validate_roster(players: &[NewPlayer]) -> Result<(), DomainError> {
    if players.len() < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooFewPlayers,
            format!(
                "at least {MIN_PLAYERS} players are required, got {}",
                players.len()
            ),
        ));
    }
    if players.len() > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            format!(
                "at most {MAX_PLAYERS} players are allowed, got {}",
                players.len()
            ),
        ));
    }

    let mut seen = HashSet::with_capacity(players.len());
    for (seat, p) in players.iter().enumerate() {
        if p.name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyName,
                format!("player in seat {} has an empty name", seat + 1),
            ));
        }
        if !seen.insert(&p.id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayerId,
                format!("player id '{}' appears more than once", p.id),
            ));
        }
    }
    Ok(())
}

/// A seated player and their per-round working state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    /// Only changes when a round is advanced.
    pub total_score: i32,
    pub current_bid: Option<u8>,
    pub current_tricks: Option<u8>,
    /// Derived from bid and tricks; unset until both exist.
    pub round_score: Option<i32>,
}

impl Player {
    pub fn from_new(p: NewPlayer) -> Self {
        Self {
            id: p.id,
            name: p.name.trim().to_string(),
            color: p.color,
            total_score: 0,
            current_bid: None,
            current_tricks: None,
            round_score: None,
        }
    }

    pub fn clear_round(&mut self) {
        self.current_bid = None;
        self.current_tricks = None;
        self.round_score = None;
    }

    /// Total after this round's score is committed.
    pub fn total_after_round(&self) -> i32 {
        self.total_score + self.round_score.unwrap_or(0)
    }
}
