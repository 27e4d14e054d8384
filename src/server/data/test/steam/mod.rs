use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::steam::{
    DiscordMemberSteamRepository, DiscordUserSteamRepository, SteamUserRepository,
};

mod member_steam;
mod steam_user;
mod user_steam;
