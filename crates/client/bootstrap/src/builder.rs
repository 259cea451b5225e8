//! Builds the dataset, runtime and dispatcher bundle used by the binary.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_frontend_core::Dispatcher;
use game_core::Dataset;
use runtime::GameRuntime;

use crate::config::BotConfig;

/// Builder that assembles runtime state and the dispatcher from configuration.
pub struct BotBuilder {
    config: BotConfig,
    dataset: Option<Dataset>,
}

impl BotBuilder {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            dataset: None,
        }
    }

    /// Use an already loaded dataset instead of the configured source.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Load the dataset (unless provided) and assemble the runtime.
    ///
    /// Any failure here is fatal: the bot must not accept commands without
    /// a dataset.
    pub async fn build(self) -> Result<BotSetup> {
        let dataset = match self.dataset {
            Some(dataset) => dataset,
            None => game_content::load_dataset(&self.config.dataset)
                .await
                .context("Failed to load boss dataset")?,
        };

        let mut builder = GameRuntime::builder().dataset(dataset);
        if let Some(seed) = self.config.rng_seed {
            tracing::info!(seed, "Using fixed RNG seed");
            builder = builder.seed(seed);
        }

        let runtime = Arc::new(builder.build()?);
        let dispatcher = Dispatcher::new(Arc::clone(&runtime), self.config.frontend.clone());

        Ok(BotSetup {
            config: self.config,
            runtime,
            dispatcher,
        })
    }
}

pub struct BotSetup {
    pub config: BotConfig,
    pub runtime: Arc<GameRuntime>,
    pub dispatcher: Dispatcher,
}
