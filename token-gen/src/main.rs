use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

/// Mint an HS256 bearer token accepted by the insights API.
///
/// Local development helper only:
/// - Claims: id, email, optional role, iat, exp
/// - Secret: `--secret`, else `JWT_SECRET` (.env honoured)
/// - Prints the compact JWS; with `--curl`, also a sample request
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject identifier (`id` claim)
    #[arg(long)]
    id: String,

    /// `email` claim
    #[arg(long)]
    email: String,

    /// Optional `role` claim (server defaults to "user")
    #[arg(long)]
    role: Option<String>,

    /// Lifetime in seconds. Negative values mint an already expired token.
    #[arg(long, default_value_t = 3600, allow_hyphen_values = true)]
    ttl_seconds: i64,

    /// Shared secret. Default: JWT_SECRET from the environment.
    #[arg(long, env = "JWT_SECRET")]
    secret: String,

    /// Also print a curl command against this base URL
    #[arg(long, value_name = "BASE_URL")]
    curl: Option<String>,
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    id: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    iat: i64,
    exp: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        id: &args.id,
        email: &args.email,
        role: args.role.as_deref(),
        iat,
        exp: iat + args.ttl_seconds,
    };

    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".to_string());

    let token = jsonwebtoken::encode(
        &header,
        &claims,
        &EncodingKey::from_secret(args.secret.as_bytes()),
    )?;

    println!("{token}");

    if let Some(base_url) = args.curl {
        println!();
        println!(
            "curl -H 'Authorization: Bearer {token}' {}/api/insights/financial-health",
            base_url.trim_end_matches('/')
        );
    }

    Ok(())
}
