//! bpfd-proto: generated tonic/prost types and client/server stubs for the
//! control plane (§4.8, §6), plus conversions to/from `bpfd-core` types.

mod convert;

pub mod bpfd {
    tonic::include_proto!("bpfd.v1");
}

pub use bpfd::tracer_client::TracerClient;
pub use bpfd::tracer_server::{Tracer, TracerServer};
pub use bpfd::{
    CreateRuleRequest, CreateRuleResponse, Event, Filter, ListRulesRequest, ListRulesResponse,
    LiveTraceRequest, RemoveRuleRequest, RemoveRuleResponse, Rule,
};
