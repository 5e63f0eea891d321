pub mod calendar;
pub mod config;
pub mod filters;
pub mod load;
pub mod pager;
pub mod prompt;
pub mod session;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;
