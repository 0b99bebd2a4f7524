use std::sync::Arc;

use async_trait::async_trait;
use vitrine_kernel::{InitCtx, Module};

use crate::catalog::Storefront;

/// Owns the catalog source. Configuration errors already stopped startup when
/// the source was built; on start the category list is fetched once so the
/// first visitor does not pay for it.
pub struct CmsModule {
    storefront: Arc<Storefront>,
}

impl CmsModule {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        Self { storefront }
    }
}

#[async_trait]
impl Module for CmsModule {
    fn name(&self) -> &'static str {
        "cms"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        anyhow::ensure!(ctx.settings.cms.page_size > 0, "cms.page_size must be positive");
        tracing::info!(
            module = self.name(),
            source = self.storefront.source_name(),
            page_size = self.storefront.page_size(),
            "cms module initialized"
        );
        Ok(())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        // a failing CMS should not keep the server down; pages show the error
        match self.storefront.categories().await {
            Ok(categories) => tracing::info!(
                module = self.name(),
                categories = categories.len(),
                "category list warmed"
            ),
            Err(err) => tracing::warn!(
                module = self.name(),
                error = %err,
                "could not warm category list"
            ),
        }
        Ok(())
    }
}

pub fn create_module(storefront: Arc<Storefront>) -> Arc<dyn Module> {
    Arc::new(CmsModule::new(storefront))
}
