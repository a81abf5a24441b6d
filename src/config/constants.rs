//! Configuration constants.
//!
//! Timeouts, sentinels, and environment variable names used throughout the
//! application.

// Network operation timeouts
/// DNS query timeout in seconds. Most queries complete in well under a
/// second; 5s gives slow authoritative servers a chance while still failing
/// fast on dead resolvers.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Resolver retry attempts before a query is reported as failed.
pub const DNS_ATTEMPTS: usize = 2;
/// Port the configured resolver is queried on.
pub const DNS_PORT: u16 = 53;
/// Timeout for the recommendation API call in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// DKIM selectors probed under `<selector>._domainkey.<domain>`. Small
/// allowlist of the selectors the big providers actually publish.
pub const DKIM_SELECTORS: &[&str] = &["selector1", "selector2", "google", "default", "k1"];

// Recommendation service
/// Environment variable holding the API credential. Never hard-coded.
pub const ADVICE_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Environment variable overriding the endpoint URL.
pub const ADVICE_URL_ENV: &str = "MAIL_POSTURE_ADVICE_URL";
/// Environment variable overriding the model id.
pub const ADVICE_MODEL_ENV: &str = "MAIL_POSTURE_ADVICE_MODEL";
/// Environment variable naming the vendor the upsell angles are written for.
pub const ADVICE_VENDOR_ENV: &str = "MAIL_POSTURE_VENDOR";
pub const DEFAULT_ADVICE_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_ADVICE_MODEL: &str = "claude-haiku-4-5";
pub const DEFAULT_ADVICE_VENDOR: &str = "our managed services team";
/// Upper bound on generated recommendation text.
pub const ADVICE_MAX_TOKENS: u32 = 1024;
