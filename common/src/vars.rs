use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{schema::OPTIONS, value::Value};

/// Option values resolved so far during a load, keyed by schema name.
///
/// Unset and `nil` options are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    values: BTreeMap<&'static str, Value>,
}

impl Resolved {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// `=`: overwrites, `None` clears.
    pub fn assign(&mut self, name: &'static str, value: Option<Value>) {
        match value {
            Some(v) => {
                self.values.insert(name, v);
            }
            None => {
                self.values.remove(name);
            }
        }
    }

    /// `||=`: only takes effect while `name` is unset. Returns whether it did.
    pub fn assign_if_unset(&mut self, name: &'static str, value: Option<Value>) -> bool {
        if self.is_set(name) {
            return false;
        }
        self.assign(name, value);
        true
    }

    /// Set options in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        OPTIONS
            .iter()
            .filter_map(|o| self.values.get(o.name).map(|v| (o.name, v)))
    }
}

/// The resolved configuration of one CI environment.
///
/// Built once by [`crate::Loader`]; every field is `None` unless a file set it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VagrantVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_cpus: Option<u64>,
    /// MB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_instances: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_master_instances: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etcd_instances: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_check_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libvirt_volume_cache: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_forks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook: Option<String>,
}

impl VagrantVars {
    pub fn to_resolved(&self) -> Resolved {
        let mut r = Resolved::default();
        r.assign("os", self.os.as_deref().map(Value::from));
        r.assign("vm_cpus", self.vm_cpus.map(Value::from));
        r.assign("vm_memory", self.vm_memory.map(Value::from));
        r.assign("num_instances", self.num_instances.map(Value::from));
        r.assign(
            "kube_master_instances",
            self.kube_master_instances.map(Value::from),
        );
        r.assign("etcd_instances", self.etcd_instances.map(Value::from));
        r.assign("network_plugin", self.network_plugin.as_deref().map(Value::from));
        r.assign("box_check_update", self.box_check_update.map(Value::from));
        r.assign(
            "libvirt_volume_cache",
            self.libvirt_volume_cache.as_deref().map(Value::from),
        );
        r.assign("num_forks", self.num_forks.map(Value::from));
        r.assign("playbook", self.playbook.as_deref().map(Value::from));
        r
    }

    /// Names of the options that are set, in schema order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.to_resolved().iter().map(|(name, _)| name).collect()
    }
}

impl From<&Resolved> for VagrantVars {
    fn from(r: &Resolved) -> Self {
        let text = |name: &str| r.get(name).and_then(Value::as_str).map(str::to_owned);
        let count = |name: &str| r.get(name).and_then(Value::as_u64);
        Self {
            os: text("os"),
            vm_cpus: count("vm_cpus"),
            vm_memory: count("vm_memory"),
            num_instances: count("num_instances"),
            kube_master_instances: count("kube_master_instances"),
            etcd_instances: count("etcd_instances"),
            network_plugin: text("network_plugin"),
            box_check_update: r.get("box_check_update").and_then(Value::as_bool),
            libvirt_volume_cache: text("libvirt_volume_cache"),
            num_forks: count("num_forks"),
            playbook: text("playbook"),
        }
    }
}
