//! Options recognized in Vagrant CI variable files.

use std::collections::HashMap;

use crate::value::{Literal, Value};

pub const NETWORK_PLUGINS: &[&str] = &[
    "calico",
    "canal",
    "cilium",
    "cni",
    "custom_cni",
    "flannel",
    "kube-ovn",
    "kube-router",
    "macvlan",
    "weave",
];

/// Disk cache modes accepted by the libvirt provider.
pub const VOLUME_CACHE_MODES: &[&str] = &[
    "default",
    "none",
    "writethrough",
    "writeback",
    "directsync",
    "unsafe",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Non-empty string naming something, e.g. an OS image
    Identifier,
    /// Integer greater than zero that fits in 32 bits
    Count,
    Flag,
    /// String restricted to a fixed set
    Choice(&'static [&'static str]),
    /// Non-empty filesystem path
    Path,
}

impl Kind {
    pub fn describe(&self) -> String {
        match self {
            Kind::Identifier => "a non-empty string".to_owned(),
            Kind::Count => format!("a positive integer up to {}", u32::MAX),
            Kind::Flag => "a boolean".to_owned(),
            Kind::Choice(choices) => format!("one of {}", choices.join(", ")),
            Kind::Path => "a non-empty path string".to_owned(),
        }
    }

    /// Coerces a literal, or returns `None` when it does not fit.
    ///
    /// `nil` never coerces; callers treat it as "unset" before asking.
    pub fn coerce(&self, literal: &Literal) -> Option<Value> {
        match (self, literal) {
            (Kind::Identifier | Kind::Path, Literal::Str(s)) if !s.is_empty() => {
                Some(Value::Str(s.clone()))
            }
            (Kind::Count, Literal::Int(digits)) => digits
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .map(|n| Value::Int(n.into())),
            (Kind::Flag, Literal::Bool(b)) => Some(Value::Bool(*b)),
            (Kind::Choice(choices), Literal::Str(s)) if choices.contains(&s.as_str()) => {
                Some(Value::Str(s.clone()))
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Kind::Identifier => "string",
            Kind::Count => "integer",
            Kind::Flag => "boolean",
            Kind::Choice(_) => "enum",
            Kind::Path => "path",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: Kind,
    pub about: &'static str,
}

/// Every recognized option, in canonical rendering order.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "os",
        kind: Kind::Identifier,
        about: "Base OS image name",
    },
    OptionSpec {
        name: "vm_cpus",
        kind: Kind::Count,
        about: "Virtual CPUs per node",
    },
    OptionSpec {
        name: "vm_memory",
        kind: Kind::Count,
        about: "Memory per node in MB",
    },
    OptionSpec {
        name: "num_instances",
        kind: Kind::Count,
        about: "Total node count",
    },
    OptionSpec {
        name: "kube_master_instances",
        kind: Kind::Count,
        about: "Control-plane node count",
    },
    OptionSpec {
        name: "etcd_instances",
        kind: Kind::Count,
        about: "etcd node count",
    },
    OptionSpec {
        name: "network_plugin",
        kind: Kind::Choice(NETWORK_PLUGINS),
        about: "CNI plugin",
    },
    OptionSpec {
        name: "box_check_update",
        kind: Kind::Flag,
        about: "Check for base box updates on startup",
    },
    OptionSpec {
        name: "libvirt_volume_cache",
        kind: Kind::Choice(VOLUME_CACHE_MODES),
        about: "Disk cache mode for libvirt volumes",
    },
    OptionSpec {
        name: "num_forks",
        kind: Kind::Count,
        about: "Ansible fork count during provisioning",
    },
    OptionSpec {
        name: "playbook",
        kind: Kind::Path,
        about: "Playbook to run instead of the default",
    },
];

lazy_static::lazy_static! {
    static ref INDEX: HashMap<&'static str, &'static OptionSpec> =
        OPTIONS.iter().map(|o| (o.name, o)).collect();
}

pub fn lookup(name: &str) -> Option<&'static OptionSpec> {
    INDEX.get(name).copied()
}
