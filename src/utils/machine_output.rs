use crate::config::settings::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render `data` for machine consumption: JSON with four-space indentation
/// or YAML. Returns `None` for the human-readable format.
pub fn render<T>(data: &T, format: OutputFormat) -> Result<Option<String>>
where
    T: Serialize,
{
    match format {
        OutputFormat::Json => {
            let mut out = Vec::new();
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
            data.serialize(&mut ser)?;
            Ok(Some(String::from_utf8_lossy(&out).into_owned()))
        }
        OutputFormat::Yaml => Ok(Some(serde_yml::to_string(data)?)),
        OutputFormat::Text => Ok(None),
    }
}

/// Print `data` when `format` is a machine format; returns whether
/// anything was printed
pub fn emit<T>(data: &T, format: OutputFormat) -> Result<bool>
where
    T: Serialize,
{
    match render(data, format)? {
        Some(out) => {
            println!("{}", out.trim_end());
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests;
