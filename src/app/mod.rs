//! Interactive viewer composing the filter field and the record table.

mod actions;
mod filter;
mod render;
mod runtime;
mod state;

#[cfg(test)]
mod tests;

pub use runtime::run;
pub use state::{App, AppOptions, Focus, InputOptions, Outcome};
