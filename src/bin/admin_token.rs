use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use catalog_storefront::middleware::auth::{ADMIN_ROLE, Claims};

/// Prints a bearer token for the admin endpoints, signed with `JWT_SECRET`.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
    let subject = std::env::args().nth(1).unwrap_or_else(|| "admin".to_string());

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| anyhow::anyhow!("Failed to set expiration"))?;

    let claims = Claims {
        sub: subject,
        role: ADMIN_ROLE.to_string(),
        exp: expiration.timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    println!("{token}");
    Ok(())
}
