//! Immutable snapshot of the process inputs read during assembly.
//!
//! Arguments and environment are captured once and passed to the assembler
//! explicitly, so assembly itself never touches process-wide state.

use std::collections::BTreeMap;

use crate::mode::Mode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationSnapshot {
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl InvocationSnapshot {
    /// Build a snapshot from explicit arguments and environment pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::{InvocationSnapshot, Mode};
    ///
    /// let snapshot = InvocationSnapshot::new(["webpack", "-p"], [("SUAVE_FABLE_PORT", "9000")]);
    /// assert_eq!(snapshot.mode(), Mode::Production);
    /// assert_eq!(snapshot.var("SUAVE_FABLE_PORT"), Some("9000"));
    /// ```
    pub fn new<A, S, E, K, V>(args: A, env: E) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: env
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Capture the current process arguments and environment.
    ///
    /// Non-UTF-8 values are converted lossily.
    pub fn capture() -> Self {
        let args = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        let env = std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();

        Self { args, env }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn mode(&self) -> Mode {
        Mode::from_args(&self.args)
    }

    /// Port of the upstream the dev-server proxies to.
    ///
    /// An unset or empty variable yields `fallback`. The value is returned
    /// as-is: a non-numeric port only fails later, inside the dev server.
    pub fn proxy_port(&self, var: &str, fallback: &str) -> String {
        match self.var(var) {
            Some(port) if !port.is_empty() => port.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAR: &str = "SUAVE_FABLE_PORT";

    #[test]
    fn proxy_port_reads_variable() {
        let snapshot = InvocationSnapshot::default().with_var(VAR, "9001");
        assert_eq!(snapshot.proxy_port(VAR, "8085"), "9001");
    }

    #[test]
    fn proxy_port_falls_back_when_unset() {
        let snapshot = InvocationSnapshot::default();
        assert_eq!(snapshot.proxy_port(VAR, "8085"), "8085");
    }

    #[test]
    fn proxy_port_falls_back_when_empty() {
        let snapshot = InvocationSnapshot::default().with_var(VAR, "");
        assert_eq!(snapshot.proxy_port(VAR, "8085"), "8085");
    }

    #[test]
    fn proxy_port_passes_garbage_through() {
        let snapshot = InvocationSnapshot::default().with_var(VAR, "not-a-port");
        assert_eq!(snapshot.proxy_port(VAR, "8085"), "not-a-port");
    }

    #[test]
    fn with_arg_changes_mode() {
        let snapshot = InvocationSnapshot::new(["webpack"], Vec::<(String, String)>::new());
        assert_eq!(snapshot.mode(), Mode::Development);
        assert_eq!(snapshot.with_arg("-p").mode(), Mode::Production);
    }

    #[test]
    fn capture_includes_program_name() {
        let snapshot = InvocationSnapshot::capture();
        assert!(!snapshot.args().is_empty());
    }
}
