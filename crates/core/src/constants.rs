/// Hour before which activity counts toward the previous day
pub const DEFAULT_DAY_BOUNDARY_HOUR: u32 = 6;

/// Highest valid day boundary hour
pub const MAX_DAY_BOUNDARY_HOUR: u32 = 23;

/// Canonical text form of an effective date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days covered by one trajectory step before the step cap applies
pub const TRAJECTORY_STEP_DAYS: i64 = 7;

/// Upper bound on trajectory steps so target lines stay legible
pub const MAX_TRAJECTORY_STEPS: i64 = 20;

/// Timezone used when none has been configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Setting keys
pub mod setting_keys {
    pub const DAY_BOUNDARY_HOUR: &str = "day_boundary_hour";
    pub const TIMEZONE: &str = "timezone";
}
