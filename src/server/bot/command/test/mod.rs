use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{
        oauth::{ExchangeError, OAuthError},
        AppError,
    },
    service::{
        oauth::{lock::RefreshLocks, TokenService},
        steam::SteamService,
        test::fake::{steam_connection, FakeExchange, FakeFactory},
    },
};


const USER_ID: u64 = 123456789;
const STEAM_ID: u64 = 76561197960287930;
