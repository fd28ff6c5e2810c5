#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints headers and record trees, `1` drops headers,
    /// `2` prints only one summary line per command.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
}
