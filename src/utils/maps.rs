use serde::{Deserialize, Serialize};

use crate::state::player::{Position, Team};

/// Spawn tables and start angles of one map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub name: String,
    pub terrorist_spawns: Vec<Position>,
    pub counter_terrorist_spawns: Vec<Position>,
    pub terrorist_start_angle: f32,
    pub counter_terrorist_start_angle: f32,
}

impl MapData {
    /// Ordered spawn points of a team; spectators have none
    pub fn spawns(&self, team: Team) -> &[Position] {
        match team {
            Team::Terrorist => &self.terrorist_spawns,
            Team::CounterTerrorist => &self.counter_terrorist_spawns,
            Team::Spectator => &[],
        }
    }

    pub fn start_angle(&self, team: Team) -> Option<f32> {
        match team {
            Team::Terrorist => Some(self.terrorist_start_angle),
            Team::CounterTerrorist => Some(self.counter_terrorist_start_angle),
            Team::Spectator => None,
        }
    }
}

/// Immutable map table - loaded once at startup
#[derive(Debug, Clone)]
pub struct MapDb {
    maps: Vec<MapData>,
}

impl MapDb {
    pub fn load() -> Self {
        let maps = vec![
            MapData {
                name: "dust2".to_string(),
                terrorist_spawns: vec![
                    Position::new(-11.5, -1.6, 46.3),
                    Position::new(-9.9, -1.6, 47.1),
                    Position::new(-13.0, -1.6, 47.8),
                    Position::new(-11.2, -1.6, 49.0),
                    Position::new(-8.4, -1.6, 48.5),
                    Position::new(-14.6, -1.6, 46.0),
                ],
                counter_terrorist_spawns: vec![
                    Position::new(20.2, -4.1, -42.7),
                    Position::new(22.0, -4.1, -43.5),
                    Position::new(18.4, -4.1, -44.0),
                    Position::new(20.9, -4.1, -45.6),
                    Position::new(23.5, -4.1, -41.8),
                    Position::new(17.1, -4.1, -42.2),
                ],
                terrorist_start_angle: 256.0,
                counter_terrorist_start_angle: 0.0,
            },
            MapData {
                name: "office".to_string(),
                terrorist_spawns: vec![
                    Position::new(2.0, 0.0, 30.0),
                    Position::new(4.0, 0.0, 30.0),
                    Position::new(6.0, 0.0, 30.0),
                ],
                counter_terrorist_spawns: vec![
                    Position::new(2.0, 0.0, -30.0),
                    Position::new(4.0, 0.0, -30.0),
                    Position::new(6.0, 0.0, -30.0),
                ],
                terrorist_start_angle: 128.0,
                counter_terrorist_start_angle: 384.0,
            },
        ];
        Self { maps }
    }

    pub fn get(&self, name: &str) -> Option<&MapData> {
        self.maps.iter().find(|map| map.name == name)
    }
}
