mod helpers;
mod profile;
mod users;
