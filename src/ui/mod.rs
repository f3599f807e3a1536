mod config;
mod panels;
mod plot;
mod utils;

pub(crate) use utils::setup_custom_visuals;
