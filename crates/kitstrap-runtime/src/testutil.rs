//! Shared test doubles for unit tests.

use std::collections::HashMap;

use kitstrap_sdk::Interp;

/// In-memory interpreter: variable table, environment view, result slot.
#[derive(Debug, Default)]
pub(crate) struct FakeInterp {
    pub globals: HashMap<String, String>,
    pub env: HashMap<String, String>,
    pub result: String,
}

impl Interp for FakeInterp {
    fn global(&self, name: &str) -> Option<String> {
        self.globals.get(name).cloned()
    }

    fn set_global(&mut self, name: &str, value: &str) {
        self.globals.insert(name.to_string(), value.to_string());
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn set_env_var(&mut self, name: &str, value: &str) {
        self.env.insert(name.to_string(), value.to_string());
    }

    fn set_result(&mut self, message: &str) {
        self.result = message.to_string();
    }
}
