mod overview;
mod reports;

pub use overview::OverviewPage;
pub use reports::ReportsPage;
