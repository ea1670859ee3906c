pub mod record;
pub mod reference;

pub use record::{CardIdentity, CardRecord, RawListing};
pub use reference::SetRow;
