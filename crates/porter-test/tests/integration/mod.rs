mod cache;
mod friend;
mod login;
mod logout;
mod provisioning;
