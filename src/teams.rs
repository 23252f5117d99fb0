// src/teams.rs

use serde::Serialize;

/// The two sides of a game file. Labels match the `team` field exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    Blue,
    Red,
}

/// Render order.
pub const TEAMS: [Team; 2] = [Team::Blue, Team::Red];

impl Team {
    pub fn label(&self) -> &'static str {
        match self { Team::Blue => "Blue", Team::Red => "Red" }
    }

    /// CSS class for markup output.
    pub fn css_class(&self) -> &'static str {
        match self { Team::Blue => "blue", Team::Red => "red" }
    }

    /// Header tint (r, g, b) for the GUI table.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self { Team::Blue => (0x25, 0x63, 0xEB), Team::Red => (0xDC, 0x26, 0x26) }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
