/// Budget page and budget updates
pub mod budget;
/// Dashboard
pub mod dashboard;
/// Reports page and chart data
pub mod reports;
/// Transaction listing, creation and deletion
pub mod transactions;
