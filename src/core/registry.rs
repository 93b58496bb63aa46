use std::sync::Arc;

use crate::config::{CommandConfig, ConfigStore};
use crate::core::dispatcher::Dispatcher;
use crate::domain::ports::{CommandExecutor, CommandRegistrar, Invocation, PlatformClassifier};

/// Binds each configured command name to a handler closed over that entry's
/// explicit ip/port. An empty config registers nothing.
pub fn register_commands<R, C, E>(
    registrar: &mut R,
    config: &CommandConfig,
    dispatcher: &Arc<Dispatcher<C, E>>,
) -> usize
where
    R: CommandRegistrar + ?Sized,
    C: PlatformClassifier + 'static,
    E: CommandExecutor + 'static,
{
    for entry in &config.commands {
        let dispatcher = Arc::clone(dispatcher);
        let ip = entry.ip.clone();
        let port = entry.port;
        registrar.register(
            &entry.name,
            Box::new(move |invocation: &dyn Invocation| {
                dispatcher.handle(invocation, ip.as_deref(), port).status()
            }),
        );
        tracing::debug!(command = %entry.name, "registered warp command");
    }
    config.commands.len()
}

/// Startup composition: load the config (degrading to empty on failure, so a
/// broken file never takes the host down) and register every entry. Returns
/// the number of commands registered.
pub fn bootstrap<R, C, E>(
    store: &ConfigStore,
    registrar: &mut R,
    dispatcher: &Arc<Dispatcher<C, E>>,
) -> usize
where
    R: CommandRegistrar + ?Sized,
    C: PlatformClassifier + 'static,
    E: CommandExecutor + 'static,
{
    let config = store.load_or_empty();
    let count = register_commands(registrar, &config, dispatcher);
    tracing::info!(commands = count, "warp command registration complete");
    count
}
