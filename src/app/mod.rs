mod root;
mod state;

pub(crate) use state::{FetchReply, ViewState, normalize_symbol};

pub use root::App;
