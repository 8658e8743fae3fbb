pub mod app;
pub mod config;
pub mod error;
pub mod geocode;
pub mod location;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
