use clap::Args;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::rbac::{Gate, Identity, Role};

#[derive(Args)]
pub struct CheckArgs {
    #[arg(long, help = "Caller role; omit to check an anonymous request")]
    pub role: Option<String>,

    #[arg(long, conflicts_with = "require", help = "Gate admitting exactly this role")]
    pub only: Option<Role>,

    #[arg(
        long,
        value_delimiter = ',',
        required_unless_present = "only",
        help = "Gate admitting any of these roles, comma separated"
    )]
    pub require: Vec<Role>,
}

impl CheckArgs {
    fn gate(&self) -> Gate {
        match self.only {
            Some(role) => Gate::only(role),
            None => Gate::any_of(self.require.iter().copied()),
        }
    }
}

/// Status code and body the server would answer with; `None` body means the
/// request reaches its handler.
pub fn evaluate(gate: &Gate, role: Option<&str>) -> (u16, Option<Value>) {
    let identity = role.map(|role| Identity::new("cli", role));

    match gate.check(identity.as_ref()) {
        Ok(()) => (200, None),
        Err(err) => (err.status_code(), Some(err.to_json())),
    }
}

pub fn handle(args: CheckArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let (status, body) = evaluate(&args.gate(), args.role.as_deref());

    match output_format {
        OutputFormat::Json => {
            let out = json!({ "allowed": body.is_none(), "status": status, "body": body });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match body {
            None => println!("allowed"),
            Some(body) => println!("{} {}", status, body),
        },
    }

    Ok(())
}
