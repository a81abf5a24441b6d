//! Mail-filter provider labeling.

use crate::models::Provider;

/// Labels the mail-filter provider from the primary MX target.
///
/// An explicit ordered rule chain: each matching rule overwrites the label
/// set by earlier ones, so later rules take precedence. The order is load-
/// bearing — `olc.protection.outlook.com` first matches the Exchange Online
/// rule and is then overwritten by the more specific Outlook.com rule, and
/// the internal-server rule (MX target contains the domain itself) may
/// overwrite anything *except* an Exchange Online match, where tenant MX
/// names routinely embed the customer domain.
///
/// Matching is case-insensitive. An empty MX target labels the domain
/// [`Provider::None`].
pub fn classify_provider(mx_target: &str, domain: &str) -> Provider {
    if mx_target.is_empty() {
        return Provider::None;
    }

    let target = mx_target.to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();

    let mut label = Provider::Other;
    if target.contains("pphosted") {
        label = Provider::Proofpoint;
    }
    if target.contains("protection.outlook.com") {
        label = Provider::ExchangeOnline;
    }
    if target.contains("olc.protection.outlook.com") {
        label = Provider::OutlookCom;
    }
    if target.contains("mimecast") {
        label = Provider::Mimecast;
    }
    if target.contains("sophos") {
        label = Provider::Sophos;
    }
    if !domain.is_empty() && target.contains(&domain) && label != Provider::ExchangeOnline {
        label = Provider::Internal;
    }
    if target.contains("barracuda") {
        label = Provider::Barracuda;
    }
    if target.contains("google") {
        label = Provider::Google;
    }
    if target.contains("secureserver.net") {
        label = Provider::GoDaddy;
    }
    label
}
