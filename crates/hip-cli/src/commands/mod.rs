pub mod dispatch;
pub mod features;
pub mod predict;
pub mod schema;
pub mod shared;
pub mod status;
