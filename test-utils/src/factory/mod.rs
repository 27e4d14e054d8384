//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories create
//! the rows their foreign keys point at, so tests only name what they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_discord_user(&db).await?;
//! let credential = factory::discord_oauth::DiscordOauthFactory::new(&db)
//!     .user_id(&user.user_id)
//!     .expires_in_seconds(30)
//!     .scope("connections identify")
//!     .build()
//!     .await?;
//! ```

pub mod discord_guild;
pub mod discord_member;
pub mod discord_oauth;
pub mod discord_user;
pub mod helpers;
pub mod steam_user;

pub use discord_guild::create_guild;
pub use discord_member::create_member;
pub use discord_oauth::create_credential;
pub use discord_user::create_discord_user;
pub use steam_user::{create_steam_user, link_steam_user};
