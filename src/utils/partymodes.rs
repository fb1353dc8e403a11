use serde::{Deserialize, Serialize};

/// Rules of a match type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMode {
    pub name: String,
    pub start_money: u32,
    pub max_money: u32,
    pub spawn_with_armor: bool,
    pub middle_party_team_swap: bool,
    pub max_rounds: u32,
    pub can_respawn: bool,
    /// Frames a dead player waits before respawning
    pub respawn_delay: u32,
    pub win_reward: u32,
    pub loss_reward: u32,
}

impl PartyMode {
    /// Round index at which sides are swapped, if this mode swaps at all
    pub fn swap_round(&self) -> Option<u32> {
        self.middle_party_team_swap.then_some(self.max_rounds / 2)
    }
}

/// Immutable party mode table - loaded once at startup
#[derive(Debug, Clone)]
pub struct PartyModeDb {
    modes: Vec<PartyMode>,
}

impl PartyModeDb {
    pub fn load() -> Self {
        let modes = vec![
            PartyMode {
                name: "competitive".to_string(),
                start_money: 800,
                max_money: 16000,
                spawn_with_armor: false,
                middle_party_team_swap: true,
                max_rounds: 30,
                can_respawn: false,
                respawn_delay: 0,
                win_reward: 3250,
                loss_reward: 1400,
            },
            PartyMode {
                name: "casual".to_string(),
                start_money: 1000,
                max_money: 10000,
                spawn_with_armor: true,
                middle_party_team_swap: true,
                max_rounds: 15,
                can_respawn: false,
                respawn_delay: 0,
                win_reward: 2700,
                loss_reward: 2400,
            },
            PartyMode {
                name: "deathmatch".to_string(),
                start_money: 16000,
                max_money: 16000,
                spawn_with_armor: true,
                middle_party_team_swap: false,
                max_rounds: 1,
                can_respawn: true,
                respawn_delay: 60 * 3, // 3 seconds
                win_reward: 0,
                loss_reward: 0,
            },
        ];
        Self { modes }
    }

    pub fn get(&self, name: &str) -> Option<&PartyMode> {
        self.modes.iter().find(|mode| mode.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|mode| mode.name.as_str())
    }
}
