pub mod check;
pub mod tune;
