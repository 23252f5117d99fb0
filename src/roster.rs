// src/roster.rs
// Splitting a game's flat player list into per-team skaters and goalie.

use crate::config::consts::GOALIE_POSITION;
use crate::player::PlayerRecord;

/// One team's players for one game. Borrows from the parsed file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamGroup<'a> {
    /// Non-goalies, in file order.
    pub skaters: Vec<&'a PlayerRecord>,
    /// First goalie listed for the team; later ones are ignored.
    pub goalie: Option<&'a PlayerRecord>,
}

impl TeamGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.skaters.is_empty() && self.goalie.is_none()
    }
}

fn on_team(p: &PlayerRecord, team: &str) -> bool {
    p.team_label() == Some(team)
}

fn is_goalie(p: &PlayerRecord) -> bool {
    p.position_label() == Some(GOALIE_POSITION)
}

/// Partition `players` for the team labelled `team` (exact match).
pub fn partition<'a>(players: &'a [PlayerRecord], team: &str) -> TeamGroup<'a> {
    let skaters = players
        .iter()
        .filter(|p| on_team(p, team) && !is_goalie(p))
        .collect();
    let goalie = players.iter().find(|p| on_team(p, team) && is_goalie(p));
    TeamGroup { skaters, goalie }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str, team: &str, pos: &str) -> PlayerRecord {
        PlayerRecord {
            name: Some(json!(name)),
            team: Some(json!(team)),
            position: Some(json!(pos)),
            ..Default::default()
        }
    }

    #[test]
    fn splits_skaters_and_goalie() {
        let players = vec![
            player("A", "Blue", "C"),
            player("B", "Red", "LW"),
            player("C", "Blue", "G"),
            player("D", "Blue", "D"),
            player("E", "Blue", "G"),
        ];
        let blue = partition(&players, "Blue");
        let names: Vec<_> = blue.skaters.iter().map(|p| p.name.clone().unwrap()).collect();
        assert_eq!(names, vec![json!("A"), json!("D")]);
        assert_eq!(blue.goalie.unwrap().name, Some(json!("C")));

        let red = partition(&players, "Red");
        assert_eq!(red.skaters.len(), 1);
        assert!(red.goalie.is_none());
    }

    #[test]
    fn missing_position_is_a_skater() {
        let players = vec![PlayerRecord { team: Some(json!("Red")), ..Default::default() }];
        assert_eq!(partition(&players, "Red").skaters.len(), 1);
    }

    #[test]
    fn lowercase_goalie_is_a_skater() {
        let players = vec![player("A", "Blue", "g")];
        let blue = partition(&players, "Blue");
        assert_eq!(blue.skaters.len(), 1);
        assert!(blue.goalie.is_none());
    }

    #[test]
    fn empty_input() {
        let group = partition(&[], "Blue");
        assert!(group.is_empty());
        assert!(partition(&[player("A", "blue", "C")], "Blue").is_empty());
    }
}
