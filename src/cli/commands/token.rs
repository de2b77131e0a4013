use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::OutputFormat;
use crate::rbac::Role;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(long, help = "User id to embed in the token")]
    pub id: String,

    #[arg(long, help = "Staff role, e.g. chief_engineer")]
    pub role: Role,
}

pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let claims = Claims::new(args.id, args.role.as_str());
    let token = generate_jwt(&claims).context("failed to sign token")?;

    match output_format {
        OutputFormat::Json => {
            let out = json!({ "token": token, "role": claims.role, "expires_at": claims.exp });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => println!("{}", token),
    }

    Ok(())
}
