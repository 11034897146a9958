pub mod error;
pub mod export;
pub mod loader;
pub mod parser;
pub mod render;
pub mod schema;
pub mod value;
pub mod vars;

pub use error::{Error, Result};
pub use loader::{Loader, UnknownPolicy};
pub use vars::VagrantVars;

#[doc(hidden)]
pub use anyhow;
#[doc(hidden)]
pub use tracing;

#[macro_export]
macro_rules! exit {
    ($err:expr, $($arg:tt)*) => {
        {
            $crate::tracing::error!($($arg)*);
            $crate::anyhow::bail!($err)
        }
    };
}
