// src/config/consts.rs

// Conversion
pub const MAX_FILES: usize = 3;
pub const GOALIE_POSITION: &str = "G";

// Labels
pub const TOTALS_LABEL: &str = "TEAM TOTALS";
pub const SKATER_HEADERS: [&str; 13] = [
    "Name", "Pos", "G", "A", "SOG", "Pass", "Ex", "Ent", "TO", "TK", "Touches", "TOI", "+/-",
];
pub const GOALIE_HEADERS: [&str; 5] = ["Name", "Shots", "Saves", "GA", "SV%"];

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "RINKSTAT_LOG";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// User-facing prompts
pub const MSG_COPIED: &str = "Table copied to clipboard (paste into Excel).";
pub const MSG_DROP_BUSY: &str = "Conversion running, drop ignored";
