//! mail_posture library: DNS mail-posture auditing.
//!
//! Resolves the mail-related DNS records (MX, SPF, DMARC, DKIM) for a list
//! of domains, classifies the mail-filter provider and authentication
//! posture, and hands back one [`DomainReport`] per domain for rendering.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use mail_posture::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["mail_posture", "--domains", "example.com"]);
//! let audit = run_audit(config).await?;
//! for report in &audit.reports {
//!     println!("{}: {}", report.domain, report.provider);
//! }
//! # Ok(())
//! # }
//! ```

pub mod advice;
pub mod classify;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::DomainReport;
pub use run::{run_audit, AuditReport};

// Internal run module (the per-domain pipeline)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::{self, StreamExt};
    use hickory_resolver::TokioAsyncResolver;
    use log::{debug, info, warn};

    use crate::advice::AdviceClient;
    use crate::classify::build_report;
    use crate::config::Config;
    use crate::dns::{
        lookup_dkim_records, lookup_dmarc_records, lookup_mx_records, lookup_txt_records,
    };
    use crate::error_handling::{print_lookup_statistics, ErrorType, LookupStats};
    use crate::initialization::{init_client, init_resolver};
    use crate::models::DomainReport;

    /// Results of an audit run.
    #[derive(Debug)]
    pub struct AuditReport {
        /// One report per input domain, in input order.
        pub reports: Vec<DomainReport>,
        /// Domains where every primary lookup failed outright.
        pub failed_domains: usize,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs the audit for the configured domains.
    ///
    /// Each domain's lookups are independent: a domain whose resolver calls
    /// fail entirely still yields a report carrying sentinel values, and the
    /// rest of the batch proceeds. Domains run through an order-preserving
    /// bounded pipeline, so `reports` always matches the input order.
    ///
    /// # Errors
    ///
    /// Returns an error only for setup failures (HTTP client); lookup and
    /// recommendation failures degrade per domain instead.
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        let start = std::time::Instant::now();

        let domains: Vec<String> = config
            .domains
            .iter()
            .map(|domain| domain.trim().trim_end_matches('.').to_ascii_lowercase())
            .filter(|domain| !domain.is_empty())
            .collect();
        info!(
            "Auditing {} domain(s) via resolver {}",
            domains.len(),
            config.dns_server
        );

        let resolver = init_resolver(config.dns_server, config.timeout_seconds);
        let stats = Arc::new(LookupStats::new());

        let advice_client = if config.recommend {
            let http = init_client().context("Failed to initialize HTTP client")?;
            AdviceClient::from_env(http).map(Arc::new)
        } else {
            None
        };

        let concurrency = config.max_concurrency.max(1);
        let reports: Vec<DomainReport> = stream::iter(domains.into_iter().map(|domain| {
            let resolver = Arc::clone(&resolver);
            let stats = Arc::clone(&stats);
            let advice_client = advice_client.clone();
            async move {
                let mut report = audit_domain(&domain, &resolver, &stats).await;
                if let Some(client) = advice_client {
                    match client.recommendations(&report).await {
                        Ok(text) => report.recommendations = Some(text),
                        Err(e) => {
                            stats.increment(ErrorType::AdviceRequestError);
                            warn!("No recommendations for {domain}: {e:#}");
                        }
                    }
                }
                report
            }
        }))
        // buffered (not buffer_unordered): completion order may vary, output
        // order must match input order.
        .buffered(concurrency)
        .collect()
        .await;

        let failed_domains = reports.iter().filter(|report| report.lookup_failed).count();
        print_lookup_statistics(&stats);

        Ok(AuditReport {
            reports,
            failed_domains,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Performs the lookups for one domain and classifies the results.
    ///
    /// Every failure is recovered here: a failed lookup counts against the
    /// run statistics and contributes an empty record set, so the report is
    /// always produced.
    async fn audit_domain(
        domain: &str,
        resolver: &TokioAsyncResolver,
        stats: &LookupStats,
    ) -> DomainReport {
        debug!("Looking up records for {domain}");

        let mut failures = 0usize;
        let mx_records = match lookup_mx_records(domain, resolver).await {
            Ok(records) => records,
            Err(_) => {
                stats.increment(ErrorType::DnsMxLookupError);
                failures += 1;
                Vec::new()
            }
        };
        let txt_records = match lookup_txt_records(domain, resolver).await {
            Ok(records) => records,
            Err(_) => {
                stats.increment(ErrorType::DnsTxtLookupError);
                failures += 1;
                Vec::new()
            }
        };
        let dmarc_records = match lookup_dmarc_records(domain, resolver).await {
            Ok(records) => records,
            Err(_) => {
                stats.increment(ErrorType::DnsDmarcLookupError);
                failures += 1;
                Vec::new()
            }
        };
        let dkim_records = lookup_dkim_records(domain, resolver).await;

        build_report(
            domain.to_string(),
            mx_records,
            txt_records,
            dmarc_records,
            dkim_records,
            failures == 3,
        )
    }
}
