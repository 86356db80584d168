mod check;
mod write;

pub(crate) use check::is_up_to_date;
pub(crate) use write::write_atomic;
