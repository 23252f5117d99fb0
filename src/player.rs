// src/player.rs
//
// Input side: one game file = `{ "players": [ ... ] }`.
// Every recognized field is kept as the raw JSON value so coercion can tell
// "missing" from "present but odd".

use serde::Deserialize;
use serde_json::Value;

use crate::error::GameParseError;

/// One player entry as found in the game file. Read-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub name: Option<Value>,
    pub position: Option<Value>,
    pub team: Option<Value>,

    pub goals: Option<Value>,
    pub assists: Option<Value>,
    pub sog: Option<Value>,
    pub passes: Option<Value>,
    pub exits: Option<Value>,
    pub entries: Option<Value>,
    pub turnovers: Option<Value>,
    pub takeaways: Option<Value>,
    pub puck_touches: Option<Value>,
    pub time_on_ice: Option<Value>,
    pub plus_minus: Option<Value>,

    // Goalies
    pub shots_faced: Option<Value>,
    pub saves: Option<Value>,
    pub goals_allowed: Option<Value>,
    // Lowercase in the source files.
    #[serde(rename = "saveperc")]
    pub save_perc: Option<Value>,
}

impl PlayerRecord {
    /// Look up a field by its JSON key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        let v = match key {
            "name" => &self.name,
            "position" => &self.position,
            "team" => &self.team,
            "goals" => &self.goals,
            "assists" => &self.assists,
            "sog" => &self.sog,
            "passes" => &self.passes,
            "exits" => &self.exits,
            "entries" => &self.entries,
            "turnovers" => &self.turnovers,
            "takeaways" => &self.takeaways,
            "puckTouches" => &self.puck_touches,
            "timeOnIce" => &self.time_on_ice,
            "plusMinus" => &self.plus_minus,
            "shotsFaced" => &self.shots_faced,
            "saves" => &self.saves,
            "goalsAllowed" => &self.goals_allowed,
            "saveperc" => &self.save_perc,
            _ => return None,
        };
        v.as_ref()
    }

    /// `team` as text, only when it is a JSON string.
    pub fn team_label(&self) -> Option<&str> {
        self.team.as_ref().and_then(Value::as_str)
    }

    /// `position` as text, only when it is a JSON string.
    pub fn position_label(&self) -> Option<&str> {
        self.position.as_ref().and_then(Value::as_str)
    }
}

/// Parsed game file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameFile {
    pub players: Vec<PlayerRecord>,
}

/// Parse game JSON text.
///
/// A missing or falsy (`null`, `false`, `""`, `0`) player list is an empty
/// game. Entries that are not objects, `null` included, are skipped since they
/// can never belong to a team.
pub fn parse_game(text: &str) -> Result<GameFile, GameParseError> {
    let root: Value = serde_json::from_str(text)?;

    let list = match &root {
        Value::Null => return Err(GameParseError::NullRoot),
        Value::Object(map) => map.get("players"),
        _ => None,
    };

    let entries = match list {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(GameFile::default()),
        Some(Value::Array(items)) => items,
        Some(Value::String(s)) if s.is_empty() => return Ok(GameFile::default()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return Ok(GameFile::default()),
        Some(other) => {
            return Err(GameParseError::PlayersNotArray(kind_of(other)));
        }
    };

    let mut players = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            logd!("Parse: skipping non-object player entry ({})", kind_of(entry));
            continue;
        }
        let record = PlayerRecord::deserialize(entry)?;
        players.push(record);
    }
    Ok(GameFile { players })
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
