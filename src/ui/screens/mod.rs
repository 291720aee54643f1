//! Body rendering for each screen kind.

pub mod notes;
pub mod qr;
pub mod withdrawal;
