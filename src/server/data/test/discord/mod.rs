use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::discord::{
    DiscordChannelRepository, DiscordGuildRepository, DiscordMemberRepository,
    DiscordUserRepository,
};

mod channel;
mod guild;
mod member;
mod user;
