pub mod batch;
pub mod check;
pub mod list;
pub mod order;
pub mod status;
