//! CLI command implementations.

pub mod overview;
pub mod report;

use eda_core::{EdaConfig, ParserConfig, parse_delimiter};

/// Engine configuration with an optional user-supplied delimiter.
fn config_with_sep(sep: Option<&str>) -> eda_core::Result<EdaConfig> {
    let delimiter = sep.map(parse_delimiter).transpose()?;
    Ok(EdaConfig {
        parser: ParserConfig {
            delimiter,
            ..ParserConfig::default()
        },
        ..EdaConfig::default()
    })
}
