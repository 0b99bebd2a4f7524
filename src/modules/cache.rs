use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use vitrine_kernel::{InitCtx, Module};

use crate::catalog::Storefront;

struct Sweeper {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// Periodically evicts cached queries nobody has refreshed for the gc time.
pub struct CacheModule {
    storefront: Arc<Storefront>,
    sweeper: Mutex<Option<Sweeper>>,
}

impl CacheModule {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        Self {
            storefront,
            sweeper: Mutex::new(None),
        }
    }

    fn take_sweeper(&self) -> Option<Sweeper> {
        self.sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[async_trait]
impl Module for CacheModule {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn start(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let every = Duration::from_secs(ctx.settings.cache.sweep_interval_secs.max(1));
        let (shutdown, mut stopped) = watch::channel(false);
        let storefront = self.storefront.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let evicted = storefront.sweep();
                        if evicted > 0 {
                            tracing::debug!(evicted, "swept idle queries");
                        }
                    }
                    _ = stopped.changed() => break,
                }
            }
        });

        let previous = self
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Sweeper { shutdown, task });
        if let Some(previous) = previous {
            previous.task.abort();
        }

        tracing::info!(module = self.name(), interval_secs = every.as_secs(), "cache sweeper started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        if let Some(sweeper) = self.take_sweeper() {
            let _ = sweeper.shutdown.send(true);
            if let Err(err) = sweeper.task.await {
                tracing::warn!(module = self.name(), error = %err, "cache sweeper ended abnormally");
            }
            tracing::info!(module = self.name(), "cache sweeper stopped");
        }
        Ok(())
    }
}

pub fn create_module(storefront: Arc<Storefront>) -> Arc<dyn Module> {
    Arc::new(CacheModule::new(storefront))
}
