//! Example: read and update the authenticated Twitter profile.
//!
//! Run with:
//!   cargo run --example twitter_profile -p eden
//!
//! Set in a .env file or the environment:
//!   EDEN_TWITTER_AUTHORIZATION="OAuth oauth_consumer_key=..., oauth_signature=..."
//!   EDEN_TWITTER_API_URL=https://api.twitter.com/1/   (optional)

use eden::twitter::{ProfileImageSize, TwitterClient, TwitterConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = TwitterConfig::from_env()?;
    let client = TwitterClient::new(&config)?;

    let limit = client.accounts().get_limit().await?;
    println!(
        "rate limit: {}/{} (resets {})",
        limit.remaining_hits,
        limit.hourly_limit,
        limit.reset_time.as_deref().unwrap_or("-")
    );
    if limit.is_exhausted() {
        anyhow::bail!("no API calls left this hour");
    }

    let me = client.accounts().skip_status().get_credentials().await?;
    println!("signed in as @{} ({})", me.screen_name, me.name);

    let image = client
        .users()
        .set_name(&me.screen_name)
        .set_size(ProfileImageSize::Bigger)
        .get_profile_image()
        .await?;
    println!("avatar: {image}");

    if let Ok(location) = std::env::var("EDEN_NEW_LOCATION") {
        let updated = client
            .accounts()
            .skip_status()
            .set_location(&location)
            .update_profile()
            .await?;
        println!("location now {:?}", updated.location);
    }

    Ok(())
}
