pub mod client;
pub mod registry;

use crate::error::Result;

pub use client::OpenRouterClient;
pub use registry::{ModelRegistry, ModelSpec, ResolvedModel};

/// Turns a prompt into generated text via a remote model.
#[allow(async_fn_in_trait)]
pub trait Completion {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
