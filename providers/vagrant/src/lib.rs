mod boxes;
mod defaults;
mod error;
mod settings;

pub use boxes::{find_box, BoxSpec, SUPPORTED_OS};
pub use defaults::Defaults;
pub use error::{Error, Result};
pub use settings::{Nodes, Provisioning, Settings, Software};
