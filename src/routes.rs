// Route path constants - single source of truth for all API paths

pub const ENDPOINT1: &str = "/endpoint1";
pub const ENDPOINT2: &str = "/endpoint2";
pub const ENDPOINT3: &str = "/endpoint3";
pub const HEALTH: &str = "/health";

pub const ALL: [&str; 4] = [ENDPOINT1, ENDPOINT2, ENDPOINT3, HEALTH];
