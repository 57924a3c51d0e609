//! Thin gRPC client over a Unix domain socket, connecting to the
//! control-plane service a running `bpfd daemon` exposes (§6).

use std::path::{Path, PathBuf};

use bpfd_proto::bpfd::{
    CreateRuleRequest, ListRulesRequest, LiveTraceRequest, RemoveRuleRequest,
};
use bpfd_proto::TracerClient;
use thiserror::Error;
use tokio::net::UnixStream;
use tonic::transport::{Channel, Endpoint, Uri};
use tonic::Streaming;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot connect to daemon at {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: tonic::transport::Error,
    },
    #[error(transparent)]
    Rpc(#[from] tonic::Status),
}

/// A connected control-plane client. One connection per CLI invocation —
/// the CLI is not long-running, so there is no reconnect/retry logic here.
pub struct DaemonClient {
    inner: TracerClient<Channel>,
}

impl DaemonClient {
    pub async fn connect(socket_path: &Path) -> Result<Self, ClientError> {
        let path = socket_path.to_path_buf();
        let channel = Endpoint::try_from("http://[::]:50051")
            .expect("static URI is always valid")
            .connect_with_connector(tower::service_fn(move |_: Uri| {
                let path = path.clone();
                async move { UnixStream::connect(path).await }
            }))
            .await
            .map_err(|source| ClientError::Connect {
                path: socket_path.to_path_buf(),
                source,
            })?;
        Ok(DaemonClient {
            inner: TracerClient::new(channel),
        })
    }

    pub async fn create_rule(&mut self, rule: bpfd_core::Rule) -> Result<(), ClientError> {
        self.inner
            .create_rule(CreateRuleRequest {
                rule: Some(rule.into()),
            })
            .await?;
        Ok(())
    }

    pub async fn remove_rule(&mut self, name: String) -> Result<(), ClientError> {
        self.inner
            .remove_rule(RemoveRuleRequest { name, tracer: None })
            .await?;
        Ok(())
    }

    pub async fn list_rules(&mut self) -> Result<Vec<bpfd_core::Rule>, ClientError> {
        let response = self.inner.list_rules(ListRulesRequest {}).await?;
        Ok(response.into_inner().rules.into_iter().map(Into::into).collect())
    }

    pub async fn live_trace(&mut self) -> Result<Streaming<bpfd_proto::Event>, ClientError> {
        let response = self.inner.live_trace(LiveTraceRequest {}).await?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
