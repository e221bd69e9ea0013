//! Server settings loaded via OrthoConfig.
//!
//! Values come from `PEOPLE_API_*` environment variables and matching command
//! line flags; anything unset falls back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::api::shaping::CredentialPolicy;
use crate::api::state::{AppState, DEFAULT_MAX_UPLOAD_BYTES};
use crate::domain::KnownIds;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Configuration values for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PEOPLE_API")]
pub struct ServerSettings {
    /// Address to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Largest upload body accepted by `POST /post-image`, in bytes.
    pub max_upload_bytes: Option<usize>,
    /// Remove `password` from update responses.
    #[ortho_config(default = false)]
    pub strip_update_credentials: bool,
}

impl ServerSettings {
    /// Address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Upload ceiling, falling back to 5 MiB.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Credential policy applied to update responses.
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy::from_strip_flag(self.strip_update_credentials)
    }

    /// Handler state derived from these settings.
    pub fn app_state(&self) -> AppState {
        AppState::new(
            KnownIds::default(),
            self.credential_policy(),
            self.max_upload_bytes(),
        )
    }
}
