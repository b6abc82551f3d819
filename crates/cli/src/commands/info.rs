//! Show the resolved application configuration.

use storekit_client::AppConfig;

/// Print application name, version and the API the CLI talks to.
#[allow(clippy::print_stdout)]
pub fn show(config: &AppConfig) {
    println!("{}", render(config));
}

fn render(config: &AppConfig) -> String {
    let auth = if config.api.auth_token.is_some() {
        "bearer token"
    } else {
        "none"
    };
    format!(
        "{}\nAPI base URL: {}\nAuthentication: {auth}",
        config.app, config.api.base_url
    )
}
