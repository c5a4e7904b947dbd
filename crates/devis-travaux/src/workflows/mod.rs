pub mod directory;
pub mod estimator;
pub mod leads;
pub mod quotes;
