mod root;
mod state;

pub(crate) use state::Preferences;

pub use root::App;
