//! Shared `key=value,...` configuration parsing for rules.

use crate::rule::RuleConfigError;

/// Typed destination for one configuration key.
pub enum Setting<'a> {
    Bool(&'a mut bool),
    Int(&'a mut i32),
    Text(&'a mut String),
}

/// Parses `configuration` against the given key/destination pairs. The
/// empty string is valid and leaves every destination untouched. Unknown
/// keys and malformed values are errors naming the offending input.
pub fn parse_name_values(
    configuration: &str,
    settings: &mut [(&str, Setting)],
) -> Result<(), RuleConfigError> {
    for entry in configuration.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            RuleConfigError::new(format!("expected key=value, got \"{entry}\""))
        })?;
        let key = key.trim();
        let value = value.trim();
        let accepted = settings
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let setting = settings
            .iter_mut()
            .find(|(name, _)| *name == key)
            .map(|(_, setting)| setting)
            .ok_or_else(|| {
                RuleConfigError::new(format!(
                    "unknown parameter \"{key}\"; accepted: {accepted}"
                ))
            })?;
        match setting {
            Setting::Bool(slot) => {
                **slot = match value {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(RuleConfigError::new(format!(
                            "parameter \"{key}\" expects true or false, got \"{other}\""
                        )))
                    }
                };
            }
            Setting::Int(slot) => {
                **slot = value.parse().map_err(|_| {
                    RuleConfigError::new(format!(
                        "parameter \"{key}\" expects an integer, got \"{value}\""
                    ))
                })?;
            }
            Setting::Text(slot) => {
                **slot = value.to_string();
            }
        }
    }
    Ok(())
}
