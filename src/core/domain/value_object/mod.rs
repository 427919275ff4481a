mod rancher_token;
mod rancher_url;

pub use rancher_token::RancherToken;
pub use rancher_url::RancherUrl;
