use std::{net::SocketAddr, time::Duration};

use fundamentals_core::financials::DEFAULT_TTL_MINUTES;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub supabase_url: String,
    pub supabase_service_role_key: String,
    pub cors_allow: Vec<String>,
    pub cache_ttl_minutes: i64,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid FF_LISTEN_ADDR");
        let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        // Service role key for server-side access
        let supabase_service_role_key =
            std::env::var("SUPABASE_SERVICE_ROLE_KEY").expect("SUPABASE_SERVICE_ROLE_KEY must be set");
        let cors_allow = std::env::var("FF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let cache_ttl_minutes: i64 = std::env::var("FF_CACHE_TTL_MINUTES")
            .unwrap_or_else(|_| DEFAULT_TTL_MINUTES.to_string())
            .parse()
            .unwrap_or(DEFAULT_TTL_MINUTES);
        let timeout_ms: u64 = std::env::var("FF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            supabase_url,
            supabase_service_role_key,
            cors_allow,
            cache_ttl_minutes,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
