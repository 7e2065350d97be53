//! Built-in placeholder data, shown until the console is wired to the
//! controller API.

use super::{Catalog, Node, Policy, Zone};

const NODES: &[(&str, &str, &str)] = &[
    ("exit-us-east-1", "100.64.10.1", "us-east"),
    ("gateway-eu-central", "100.64.20.2", "eu-central"),
];

const ZONES: &[(&str, &str)] = &[
    ("us-east", "Primary exits for US East."),
    ("eu-central", "Regional gateways for Europe."),
];

const POLICIES: &[(&str, &str, &str, &str)] = &[
    ("Allow Internal", "us-east", "eu-central", "allow"),
    ("Block Unknown", "unknown", "core-services", "deny"),
];

/// Catalog backed by the fixed sample records above.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl Catalog for SampleCatalog {
    fn nodes(&self) -> Vec<Node> {
        NODES
            .iter()
            .map(|&(name, address, zone)| Node {
                name: name.into(),
                address: address.into(),
                zone: zone.into(),
            })
            .collect()
    }

    fn zones(&self) -> Vec<Zone> {
        ZONES
            .iter()
            .map(|&(name, description)| Zone {
                name: name.into(),
                description: description.into(),
            })
            .collect()
    }

    fn policies(&self) -> Vec<Policy> {
        POLICIES
            .iter()
            .map(|&(name, source, destination, action)| Policy {
                name: name.into(),
                source: source.into(),
                destination: destination.into(),
                action: action.into(),
            })
            .collect()
    }
}
