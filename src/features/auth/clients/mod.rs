mod gotrue_client;

pub use gotrue_client::{GoTrueClient, ProviderSession, ProviderUser};
