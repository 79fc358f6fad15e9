mod advanced;
mod basic;

pub(crate) use advanced::render_advanced;
pub(crate) use basic::render_basic;
