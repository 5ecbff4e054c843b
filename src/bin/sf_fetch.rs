//! Command-line access to a Salesforce org over the REST API.
//!
//! Credentials come from the environment (see
//! [`PasswordCredentials::from_env`]). Output is the JSON response, pretty
//! printed on stdout.
//!
//! ```sh
//! export SF_USERNAME=... SF_PASSWORD=... SF_SECURITY_TOKEN=...
//! export SF_CLIENT_ID=... SF_CLIENT_SECRET=...
//! cargo run --bin sf-fetch -- query "SELECT Id, Name FROM Account LIMIT 5"
//! cargo run --bin sf-fetch -- sobject Account 001xx000003DGb2AAG
//! cargo run --bin sf-fetch -- get /services/data/
//! cargo run --bin sf-fetch -- post /services/data/v26.0/sobjects/Account '{"Name":"Acme"}'
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use relay_sf_api::{PasswordCredentials, SalesforceClient};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  sf-fetch query <soql>
  sf-fetch sobject <type> <id>
  sf-fetch get <endpoint>
  sf-fetch post <endpoint> <json-body>";

#[derive(Debug)]
enum Command {
    Query(String),
    SObject(String, String),
    Get(String),
    Post(String, Value),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [cmd, soql] if cmd == "query" => Ok(Command::Query(soql.clone())),
        [cmd, sobject_type, id] if cmd == "sobject" => {
            Ok(Command::SObject(sobject_type.clone(), id.clone()))
        }
        [cmd, endpoint] if cmd == "get" => Ok(Command::Get(endpoint.clone())),
        [cmd, endpoint, body] if cmd == "post" => {
            let body = serde_json::from_str(body).map_err(|e| format!("invalid JSON body: {e}"))?;
            Ok(Command::Post(endpoint.clone(), body))
        }
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    let creds = PasswordCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set SF_USERNAME, SF_PASSWORD, SF_CLIENT_ID and SF_CLIENT_SECRET.");
        eprintln!("  SF_SECURITY_TOKEN and SF_LOGIN_URL are optional.");
        std::process::exit(1);
    });

    let client = SalesforceClient::new(creds).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        std::process::exit(1);
    });
    tracing::debug!(token_url = client.token_url(), ?command, "running command");

    let result = match command {
        Command::Query(soql) => client.query(&soql).await,
        Command::SObject(sobject_type, id) => client.sobject(&sobject_type, &id).await,
        Command::Get(endpoint) => client.get(&endpoint).await,
        Command::Post(endpoint, body) => client.post(&endpoint, &body).await.map(Value::String),
    };

    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
