mod tables;

pub use self::tables::{
    breakdown as print_breakdown_report, cohort as print_cohort_report,
    player as print_player_report,
};
