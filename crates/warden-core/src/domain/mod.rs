//! Domain entities - the core business objects.

mod account;

pub use account::{Account, HashedPassword, mask_email, normalize_email};
