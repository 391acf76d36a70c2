use std::env;

// Container for every setting the gateway needs
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub upstream: UpstreamConfig,
    pub auth: AuthConfig,
}

// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Remote travel API settings
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

// Token cookie settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for the symmetric cipher that seals the token cookie.
    pub crypt_secret: String,
    /// Name of the encrypted session cookie.
    pub token_cookie: String,
    /// Name of the plain-text fallback cookie some clients still set.
    pub fallback_cookie: String,
    pub cookie_max_age_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "vandre_admin=debug,tower_http=debug".to_string()),
            },
            upstream: UpstreamConfig {
                base_url: env::var("TRAVEL_API_URL").expect("TRAVEL_API_URL must be set"),
                timeout_seconds: env::var("TRAVEL_API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("TRAVEL_API_TIMEOUT_SECONDS must be a valid number"),
            },
            auth: AuthConfig {
                crypt_secret: env::var("CRYPT_SECRET")
                    .unwrap_or_else(|_| "fraternidade".to_string()),
                token_cookie: env::var("TOKEN_COOKIE").unwrap_or_else(|_| "token".to_string()),
                fallback_cookie: env::var("FALLBACK_COOKIE")
                    .unwrap_or_else(|_| "access_token".to_string()),
                cookie_max_age_hours: env::var("COOKIE_MAX_AGE_HOURS")
                    .unwrap_or_else(|_| "23".to_string())
                    .parse()
                    .expect("COOKIE_MAX_AGE_HOURS must be a valid number"),
            },
        }
    }
}
