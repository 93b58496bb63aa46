pub mod dispatcher;
pub mod registry;
pub mod resolve;

pub use crate::domain::model::{Invoker, Platform, ResolvedEndpoint};
pub use crate::domain::ports::{
    CommandExecutor, CommandHandler, CommandRegistrar, Invocation, PlatformClassifier,
};
pub use crate::utils::error::Result;
