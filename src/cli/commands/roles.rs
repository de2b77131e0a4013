use serde_json::json;

use crate::cli::OutputFormat;
use crate::rbac::Role;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let roles: Vec<_> = Role::ALL
                .iter()
                .map(|role| json!({ "role": role.as_str(), "label": role.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&roles)?);
        }
        OutputFormat::Text => {
            for role in Role::ALL {
                println!("{:<20} {}", role.as_str(), role.label());
            }
        }
    }

    Ok(())
}
