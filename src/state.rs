// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::mentor::MentorRegistry;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    pub mentors: MentorRegistry,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            mentors: MentorRegistry::new(),
            http,
        })
    }
}
