// src/table.rs
//! TableModel: the display-ready form of one team's skaters or goalie.
//!
//! Builders here are pure: players in, table out. Cells are plain display
//! text (blank for missing stats); markup renderers do their own escaping,
//! so copy and CSV export carry exactly what is shown.

use serde::Serialize;

use crate::aggregate::{AggregateRow, StatKey};
use crate::config::consts::{GOALIE_HEADERS, SKATER_HEADERS, TOTALS_LABEL};
use crate::core::coerce::{fmt_number, numeric, raw_display, save_percentage, text_display};
use crate::player::PlayerRecord;
use crate::roster::{self, TeamGroup};
use crate::teams::{Team, TEAMS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Skaters,
    Goalie,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableModel {
    pub title: String,
    pub team: Team,
    pub kind: TableKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<String>>,
}

impl TableModel {
    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    /// Data rows plus the totals row, if any.
    pub fn nrows(&self) -> usize {
        self.rows.len() + usize::from(self.totals.is_some())
    }

    /// Header, data rows, then totals, as one sequence of lines.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .chain(self.totals.iter())
    }
}

fn skater_row(p: &PlayerRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(SKATER_HEADERS.len());
    row.push(text_display(p.name.as_ref()));
    row.push(text_display(p.position.as_ref()));
    for key in StatKey::ALL {
        let value = p.field(key.key());
        row.push(if key.is_free_form() { raw_display(value) } else { numeric(value).display() });
    }
    row
}

fn totals_row(skaters: &[&PlayerRecord]) -> Vec<String> {
    let agg = AggregateRow::compute(skaters);
    let mut row = cells![TOTALS_LABEL, ""];
    row.extend(agg.values().iter().map(|v| fmt_number(*v)));
    row
}

/// Skater table with a TEAM TOTALS row; `None` when there are no skaters.
pub fn skater_table(title: &str, skaters: &[&PlayerRecord], team: Team) -> Option<TableModel> {
    if skaters.is_empty() {
        return None;
    }
    Some(TableModel {
        title: s!(title),
        team,
        kind: TableKind::Skaters,
        headers: SKATER_HEADERS.iter().map(|h| s!(*h)).collect(),
        rows: skaters.iter().map(|p| skater_row(p)).collect(),
        totals: Some(totals_row(skaters)),
    })
}

/// Single-row goalie table; `None` without a goalie.
pub fn goalie_table(title: &str, goalie: Option<&PlayerRecord>, team: Team) -> Option<TableModel> {
    let g = goalie?;
    let row = vec![
        text_display(g.name.as_ref()),
        numeric(g.shots_faced.as_ref()).display(),
        numeric(g.saves.as_ref()).display(),
        numeric(g.goals_allowed.as_ref()).display(),
        save_percentage(g.save_perc.as_ref()),
    ];
    Some(TableModel {
        title: s!(title),
        team,
        kind: TableKind::Goalie,
        headers: GOALIE_HEADERS.iter().map(|h| s!(*h)).collect(),
        rows: vec![row],
        totals: None,
    })
}

/// "Blue Skaters" then "Blue Goalie", skipping whichever is empty.
pub fn group_tables(group: &TeamGroup<'_>, team: Team) -> Vec<TableModel> {
    if group.is_empty() {
        logd!("Tables: no {} players", team);
        return Vec::new();
    }
    let skaters = skater_table(&format!("{team} Skaters"), &group.skaters, team);
    let goalie = goalie_table(&format!("{team} Goalie"), group.goalie, team);
    skaters.into_iter().chain(goalie).collect()
}

pub fn team_tables(players: &[PlayerRecord], team: Team) -> Vec<TableModel> {
    let group = roster::partition(players, team.label());
    group_tables(&group, team)
}

/// All tables for one game: Blue first, then Red.
pub fn game_tables(players: &[PlayerRecord]) -> Vec<TableModel> {
    TEAMS.iter().flat_map(|t| team_tables(players, *t)).collect()
}
