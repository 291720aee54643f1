//! Common reusable widget components.
//!
//! - [`AmountDisplay`]: satoshi amount, optionally jumbo or masked
//! - [`KeyValueRow`]: a labelled value, masked under privacy mode when sensitive
//! - [`Button`]: a bracketed action label

mod amount;
mod button;
mod key_value;

pub use amount::AmountDisplay;
pub use button::Button;
pub use key_value::KeyValueRow;
