mod discord;
mod oauth;
mod steam;
