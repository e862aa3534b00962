use clap::ValueEnum;

/// Format of the emitted configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum EmitFormat {
    /// JavaScript module (`module.exports = {...};`)
    ///
    /// Loadable by the bundler as its config file; rule patterns are
    /// regex literals.
    #[value(name = "js")]
    Js,

    /// Pretty-printed JSON
    ///
    /// For inspection and tooling; rule patterns are plain strings.
    #[value(name = "json")]
    Json,
}
