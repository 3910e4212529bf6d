//! Capabilities - functions the model can call mid-conversation
//!
//! A [`Capability`] pairs a function name, a description, a parameter
//! list and a handler. Handlers are either plain functions or async
//! functions that may wait on network I/O. Capabilities are collected
//! into a [`CapabilityRegistry`], which resolves function-call requests
//! from the model and runs the matching handler.

mod registry;
mod parameter;
pub mod agent;
pub mod io;

pub use parameter::{to_schema, ParameterDefinition};
pub use registry::{CapabilityRegistry, ToolDefinition};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::error::Error;
use crate::Result;

/// Synchronous handler
pub type SyncHandler = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

/// Asynchronous handler
pub type AsyncHandler = Arc<dyn Fn(Value) -> BoxFuture<'static, Result<String>> + Send + Sync>;

/// How a capability produces its result
#[derive(Clone)]
pub enum Handler {
    Sync(SyncHandler),
    Async(AsyncHandler),
}

/// A named, schema-described function the model may invoke.
///
/// Immutable once built. The declared parameters must match what the
/// handler reads out of its argument object; beyond basic type checks
/// in the handler itself nothing enforces that at runtime.
#[derive(Clone)]
pub struct Capability {
    name: String,
    description: String,
    parameters: Vec<ParameterDefinition>,
    handler: Handler,
}

impl Capability {
    /// Build a capability around a synchronous function
    pub fn provide<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterDefinition>,
        f: F,
    ) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Handler::Sync(Arc::new(f)),
        }
    }

    /// Build a capability around an async function
    pub fn provide_async<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterDefinition>,
        f: F,
    ) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        let handler: AsyncHandler =
            Arc::new(move |args: Value| -> BoxFuture<'static, Result<String>> { Box::pin(f(args)) });

        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Handler::Async(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    pub fn is_async(&self) -> bool {
        matches!(self.handler, Handler::Async(_))
    }

    /// Convert to tool definition for LLM
    pub fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: to_schema(&self.parameters),
        }
    }

    /// Run the handler with the given argument object
    pub async fn invoke(&self, args: Value) -> Result<String> {
        match &self.handler {
            Handler::Sync(f) => f(&args),
            Handler::Async(f) => f(args).await,
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("async", &self.is_async())
            .finish()
    }
}

/// Read a string argument, failing if it is missing or not a string
pub fn string_arg(args: &Value, key: &str) -> Result<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidArguments(format!("Missing '{}' parameter", key)))
}
