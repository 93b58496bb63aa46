pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CommandConfig, CommandEntry, ConfigStore, DEFAULT_CONFIG_PATH};
pub use crate::core::dispatcher::{Dispatcher, Outcome};
pub use crate::core::registry::{bootstrap, register_commands};
pub use crate::core::resolve::{
    resolve, BEDROCK_DEFAULT_HOST, BEDROCK_DEFAULT_PORT, JAVA_DEFAULT_HOST, JAVA_DEFAULT_PORT,
};
pub use crate::domain::model::{Invoker, Platform, ResolvedEndpoint};
pub use crate::domain::ports::{
    ClassifierError, CommandExecutor, CommandHandler, CommandRegistrar, ExecuteError, Invocation,
    PlatformClassifier,
};
pub use crate::utils::error::{Result, WarpError};
