//! Data Transfer Objects

mod harvest_options;
mod harvest_report;

pub use harvest_options::HarvestOptions;
pub use harvest_report::HarvestReport;
