//! Control-plane gRPC service (§4.8, §6).

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use bpfd_actions::ActionRegistry;
use bpfd_core::Rule;
use bpfd_proto::bpfd::{
    CreateRuleRequest, CreateRuleResponse, ListRulesRequest, ListRulesResponse, LiveTraceRequest,
    RemoveRuleRequest, RemoveRuleResponse,
};
use bpfd_proto::{Event as WireEvent, Tracer as TracerService};
use bpfd_rules::{ConfigError, RuleStore};
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::info;

use crate::buffer::EventBuffer;

/// Poll interval between empty `EventBuffer` drains while a `LiveTrace`
/// client is attached (§5: "busy-waits ... with a small sleep between empty
/// polls to avoid spinning").
const LIVE_TRACE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The control plane implements the generated `Tracer` service over the
/// daemon's rule store, action registry, known tracer names, and live-trace
/// buffer. Named after the `.proto` service, not [`bpfd_tracers::Tracer`].
pub struct ControlPlane {
    rule_store: Arc<RuleStore>,
    action_registry: Arc<ActionRegistry>,
    tracer_names: Vec<String>,
    buffer: Arc<EventBuffer>,
}

impl ControlPlane {
    pub fn new(
        rule_store: Arc<RuleStore>,
        action_registry: Arc<ActionRegistry>,
        tracer_names: Vec<String>,
        buffer: Arc<EventBuffer>,
    ) -> Self {
        ControlPlane {
            rule_store,
            action_registry,
            tracer_names,
            buffer,
        }
    }
}

fn status_for(error: ConfigError) -> Status {
    match error {
        ConfigError::EmptyName | ConfigError::EmptyTracer | ConfigError::InvalidRuntimeTag(_) => {
            Status::invalid_argument(format!("invalid-rule: {error}"))
        }
        ConfigError::UnknownTracer(_) => Status::invalid_argument(format!("unknown-tracer: {error}")),
        ConfigError::UnknownAction(_) => Status::invalid_argument(format!("unknown-action: {error}")),
        ConfigError::MalformedFile { .. } => Status::invalid_argument(format!("invalid-rule: {error}")),
    }
}

#[tonic::async_trait]
impl TracerService for ControlPlane {
    async fn create_rule(
        &self,
        request: Request<CreateRuleRequest>,
    ) -> Result<Response<CreateRuleResponse>, Status> {
        let wire_rule = request
            .into_inner()
            .rule
            .ok_or_else(|| Status::invalid_argument("invalid-rule: missing rule"))?;
        let rule: Rule = wire_rule.into();

        bpfd_rules::validate(&rule, &self.tracer_names, &self.action_registry.names())
            .map_err(status_for)?;

        info!(tracer = %rule.tracer, name = %rule.name, "rule created");
        self.rule_store.insert(rule);
        Ok(Response::new(CreateRuleResponse {}))
    }

    async fn remove_rule(
        &self,
        request: Request<RemoveRuleRequest>,
    ) -> Result<Response<RemoveRuleResponse>, Status> {
        let request = request.into_inner();
        if request.name.is_empty() {
            return Err(Status::invalid_argument("empty-name"));
        }
        info!(name = %request.name, tracer = ?request.tracer, "rule removed");
        self.rule_store.remove(&request.name, request.tracer.as_deref());
        Ok(Response::new(RemoveRuleResponse {}))
    }

    async fn list_rules(
        &self,
        _request: Request<ListRulesRequest>,
    ) -> Result<Response<ListRulesResponse>, Status> {
        let rules = self.rule_store.list().into_iter().map(Into::into).collect();
        Ok(Response::new(ListRulesResponse { rules }))
    }

    type LiveTraceStream = Pin<Box<dyn tokio_stream::Stream<Item = Result<WireEvent, Status>> + Send + 'static>>;

    async fn live_trace(
        &self,
        _request: Request<LiveTraceRequest>,
    ) -> Result<Response<Self::LiveTraceStream>, Status> {
        let subscription = self.buffer.subscribe();
        let (tx, rx) = tokio::sync::mpsc::channel(32);

        tokio::spawn(async move {
            loop {
                match subscription.try_pop() {
                    Some(event) => {
                        if tx.send(Ok(event.into())).await.is_err() {
                            break; // client disconnected
                        }
                    }
                    None => {
                        tokio::time::sleep(LIVE_TRACE_POLL_INTERVAL).await;
                        if tx.is_closed() {
                            break;
                        }
                    }
                }
            }
        });

        let stream = ReceiverStream::new(rx);
        Ok(Response::new(Box::pin(stream)))
    }
}

#[cfg(test)]
#[path = "control_plane_tests.rs"]
mod tests;
