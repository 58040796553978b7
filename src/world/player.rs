//! Player connection state and team membership
//!
//! The host server owns and mutates these records; the mitigation policy
//! only reads them for the duration of a single damage callback.

use crate::core::types::{PlayerId, TeamId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A known player, connected or sleeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub online: bool,
    pub team: Option<TeamId>,
}

/// A player team as tracked by the host's relationship registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub members: Vec<PlayerId>,
}

/// Lookup tables over players and teams
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    players: AHashMap<PlayerId, PlayerRecord>,
    teams: AHashMap<TeamId, Team>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, id: PlayerId, online: bool) {
        self.players.insert(id, PlayerRecord { id, online, team: None });
    }

    /// Create a team and point each known member's record at it.
    pub fn form_team(&mut self, id: TeamId, members: &[PlayerId]) {
        for member in members {
            if let Some(player) = self.players.get_mut(member) {
                player.team = Some(id);
            }
        }
        self.teams.insert(id, Team { id, members: members.to_vec() });
    }

    pub fn set_online(&mut self, id: PlayerId, online: bool) {
        if let Some(player) = self.players.get_mut(&id) {
            player.online = online;
        }
    }

    pub fn find(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(&id)
    }

    /// Unknown ids count as offline, mirroring the host's lookup-or-null.
    pub fn is_offline(&self, id: PlayerId) -> bool {
        self.find(id).is_none_or(|player| !player.online)
    }

    pub fn team_of(&self, id: PlayerId) -> Option<&Team> {
        let team_id = self.find(id)?.team?;
        self.teams.get(&team_id)
    }

    /// True when `second` is on `first`'s team.
    pub fn are_teammates(&self, first: PlayerId, second: PlayerId) -> bool {
        self.team_of(first)
            .is_some_and(|team| team.members.contains(&second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_player_is_offline() {
        let directory = PlayerDirectory::new();
        assert!(directory.is_offline(PlayerId(42)));
    }

    #[test]
    fn test_online_state() {
        let mut directory = PlayerDirectory::new();
        directory.add_player(PlayerId(1), true);
        directory.add_player(PlayerId(2), false);

        assert!(!directory.is_offline(PlayerId(1)));
        assert!(directory.is_offline(PlayerId(2)));

        directory.set_online(PlayerId(1), false);
        assert!(directory.is_offline(PlayerId(1)));
    }

    #[test]
    fn test_teammates() {
        let mut directory = PlayerDirectory::new();
        directory.add_player(PlayerId(1), true);
        directory.add_player(PlayerId(2), false);
        directory.add_player(PlayerId(3), true);
        directory.form_team(TeamId(10), &[PlayerId(1), PlayerId(2)]);

        assert!(directory.are_teammates(PlayerId(1), PlayerId(2)));
        assert!(directory.are_teammates(PlayerId(2), PlayerId(1)));
        assert!(!directory.are_teammates(PlayerId(1), PlayerId(3)));
        assert!(!directory.are_teammates(PlayerId(3), PlayerId(1)));
    }

    #[test]
    fn test_team_of_untracked_player() {
        let mut directory = PlayerDirectory::new();
        directory.add_player(PlayerId(1), true);
        assert!(directory.team_of(PlayerId(1)).is_none());
        assert!(directory.team_of(PlayerId(99)).is_none());
    }
}
