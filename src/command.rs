mod completions;
mod generate;
mod man;
mod schema;

pub(crate) use completions::run as completions;
pub(crate) use generate::run as generate;
pub(crate) use man::run as man;
pub(crate) use schema::run as schema;
