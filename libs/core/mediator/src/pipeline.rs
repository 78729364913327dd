use crate::error::{Error, FieldErrors, Outcome};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;
use validator::ValidationErrors;

/// A use-case input with a fixed response type.
pub trait Request: Send + 'static {
    type Response: Send;

    /// Name recorded on the `mediator.send` span.
    const NAME: &'static str;

    /// Runs every rule registered for this request. Request types without a
    /// validator keep the default, which accepts everything.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Outcome<R::Response>;
}

/// Dispatches requests to a handler through the validation pipeline.
pub struct Mediator<H> {
    handler: Arc<H>,
}

impl<H> Clone for Mediator<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: Send + Sync + 'static> Mediator<H> {
    pub fn new(handler: H) -> Self {
        Self::from_arc(Arc::new(handler))
    }

    pub fn from_arc(handler: Arc<H>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub async fn send<R>(&self, request: R) -> Outcome<R::Response>
    where
        R: Request,
        H: Handler<R>,
    {
        let span = tracing::debug_span!("mediator.send", request = R::NAME);

        async move {
            if let Err(errors) = request.validate() {
                let failures = collect_failures(&errors);
                tracing::debug!(
                    fields = ?failures.keys().collect::<Vec<_>>(),
                    "Request failed validation"
                );
                return Err(Error::validation_failed(failures));
            }

            self.handler.handle(request).await
        }
        .instrument(span)
        .await
    }
}

/// Flattens validator output into field → messages, keyed by the camelCase
/// wire name. Rules without a message fall back to their code.
fn collect_failures(errors: &ValidationErrors) -> FieldErrors {
    let mut failures = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = failures.entry(camel_case(field.as_ref())).or_default();
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            messages.push(message);
        }
    }

    failures
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
