pub mod frontend;
pub mod info;
pub mod state;
pub mod viewer;

pub use frontend::InquireFrontend;
pub use info::{BaseStats, CreatureInfo, ExtractError};
pub use state::{StatGauge, ViewState, STAT_MAX};
pub use viewer::{run_viewer, Frontend, InfoViewer, ViewError};
