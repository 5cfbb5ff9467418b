pub mod pacmd;

/// Access to the audio server's sink table.
pub trait SinkBackend {
    /// Returns the `index:`/`name:` lines of the sink listing.
    fn list_sinks_text(&self) -> anyhow::Result<String>;

    /// Makes `index` the default sink and returns whatever the control
    /// program wrote to its error stream.
    fn set_default_sink(&self, index: u32) -> anyhow::Result<String>;
}
