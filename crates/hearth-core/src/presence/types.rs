use serde::{Deserialize, Serialize};

/// A network endpoint a buddy announces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerService {
    pub name: String,
    pub service_type: String,
    pub address: String,
    pub port: u16,
}

/// A peer known to the presence directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buddy {
    pub name: String,
    #[serde(default)]
    pub services: Vec<PeerService>,
}

impl Buddy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: Vec::new(),
        }
    }

    pub fn with_service(mut self, service: PeerService) -> Self {
        self.services.push(service);
        self
    }

    /// The first announced service of `service_type`.
    pub fn service_of_type(&self, service_type: &str) -> Option<&PeerService> {
        self.services
            .iter()
            .find(|service| service.service_type == service_type)
    }
}

/// A shared activity as announced on the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceActivity {
    pub id: String,
    /// Raw color string as reported, e.g. `"#FF2B34,#005FE4"`.
    pub color: String,
}
