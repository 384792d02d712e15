//! Outbound reachability probes.

mod http_prober;

pub use http_prober::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT, HttpProber, ProbeSettings,
};
