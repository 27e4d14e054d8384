pub mod channel;
pub mod guild;
pub mod member;
pub mod user;

pub use channel::DiscordChannelRepository;
pub use guild::DiscordGuildRepository;
pub use member::DiscordMemberRepository;
pub use user::DiscordUserRepository;
