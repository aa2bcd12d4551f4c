pub mod cli;
pub mod conda;
pub mod licensing;
pub mod starlark;
pub mod utils;

pub use conda::Package;
pub use licensing::{License, LicenseError, LicenseInfo, get_license};
