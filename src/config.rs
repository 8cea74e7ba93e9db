/// What to do when a mutation runs into a broken tree invariant.
///
/// Such faults never happen on a tree built only through the public
/// mutation API. They show up when a malformed node graph is installed
/// via [`Llrb::set_root`](crate::Llrb::set_root).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaultPolicy {
    /// Log the fault and panic with the diagnostic.
    Panic,
    /// Log the fault, reset the tree to empty and return
    /// [`Error::Fatal`](crate::Error::Fatal) to the caller.
    Propagate,
}

impl Default for FaultPolicy {
    fn default() -> FaultPolicy {
        if cfg!(debug_assertions) {
            FaultPolicy::Panic
        } else {
            FaultPolicy::Propagate
        }
    }
}

/// Configuration for [`Llrb`](crate::Llrb) instances.
#[derive(Clone, Debug)]
pub struct Config {
    /// Identify the instance in logs.
    pub name: String,
    /// Refer to [`FaultPolicy`].
    pub fault_policy: FaultPolicy,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            name: "llrb".to_string(),
            fault_policy: Default::default(),
        }
    }
}

impl Config {
    pub fn set_name<S>(&mut self, name: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.name = name.as_ref().to_string();
        self
    }

    pub fn set_fault_policy(&mut self, policy: FaultPolicy) -> &mut Self {
        self.fault_policy = policy;
        self
    }
}
