use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::Parser;
use trust_dns_resolver::TokioAsyncResolver;

use mailprobe::{
    MxStatus, ProbeOptions, StagePlan, VerificationReport, check_mx, verify_email,
};

use std::io::{self, BufRead};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mailprobe-cli")]
struct Cli {
    /// address to verify (or use --stdin)
    email: Option<String>,

    /// read addresses from stdin, one per line
    #[arg(long, conflicts_with = "email")]
    stdin: bool,

    /// emit JSON (pretty for one address, one object per line with --stdin)
    #[arg(long)]
    json: bool,

    /// stop after the MX lookup and print the records
    #[arg(long)]
    mx_only: bool,

    /// SMTP port to probe
    #[arg(long, default_value_t = 25)]
    port: u16,

    /// identity announced in EHLO
    #[arg(long, default_value = "mail.example.org")]
    helo_domain: String,

    /// envelope sender for MAIL FROM
    #[arg(long, default_value = "name@example.org")]
    mail_from: String,

    /// TCP connect deadline per host, in milliseconds
    #[arg(long, default_value_t = 3000)]
    connect_timeout_ms: u64,
}

fn confirmed(report: &VerificationReport) -> bool {
    report.mailbox_exists && !report.catch_all
}

fn classify(report: &VerificationReport) -> &'static str {
    if !report.format_valid {
        "invalid format"
    } else if !report.mx_found {
        "no MX records"
    } else if !report.connected {
        "unreachable"
    } else if !report.mailbox_exists {
        "rejected"
    } else if report.catch_all {
        "catch-all"
    } else {
        "deliverable"
    }
}

fn print_human(report: &VerificationReport) {
    println!("[{}] {}", classify(report), report.email);
    if report.format_valid {
        println!(
            "        mx={} connected={} mailbox={} catch_all={} disposable={}",
            report.mx_found,
            report.connected,
            report.mailbox_exists,
            report.catch_all,
            report.disposable
        );
    }
}

fn collect_addresses(cli: &Cli) -> Result<Vec<String>> {
    if cli.stdin {
        let mut addresses = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                addresses.push(trimmed.to_string());
            }
        }
        Ok(addresses)
    } else {
        Ok(cli
            .email
            .iter()
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .collect())
    }
}

async fn run_mx_only(cli: &Cli, addresses: &[String]) -> Result<bool> {
    let mut any_unconfirmed = false;
    for address in addresses {
        let domain = address.rsplit('@').next().unwrap_or(address.as_str());
        match check_mx(domain).await {
            Ok(status) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&status)?);
                } else {
                    match &status {
                        MxStatus::Records(records) => {
                            for record in records {
                                println!("{} {}", record.preference, record.exchange);
                            }
                        }
                        MxStatus::NoRecords => println!("no MX records for {domain}"),
                    }
                }
                if status.records().is_empty() {
                    any_unconfirmed = true;
                }
            }
            Err(err) => {
                eprintln!("{domain}: {err}");
                any_unconfirmed = true;
            }
        }
    }
    Ok(any_unconfirmed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let addresses = collect_addresses(&cli)?;
    if addresses.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    if cli.mx_only {
        if run_mx_only(&cli, &addresses).await? {
            std::process::exit(2);
        }
        return Ok(());
    }

    let options = ProbeOptions {
        port: cli.port,
        helo_domain: cli.helo_domain.clone(),
        mail_from: cli.mail_from.clone(),
        connect_timeout: Duration::from_millis(cli.connect_timeout_ms),
    };
    let plan = StagePlan::new(&options);
    let resolver =
        TokioAsyncResolver::tokio_from_system_conf().context("initialize DNS resolver")?;

    let mut reports = Vec::new();
    for address in &addresses {
        reports.push(verify_email(address, &resolver, &plan, &options).await);
    }

    if cli.json {
        if cli.stdin {
            for report in &reports {
                println!("{}", serde_json::to_string(report)?);
            }
        } else if let Some(report) = reports.first() {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    } else {
        for report in &reports {
            print_human(report);
        }
    }

    // exit codes: 0 all confirmed, 2 unconfirmed, 1 fatal
    let any_unconfirmed = reports.iter().any(|report| !confirmed(report));
    if any_unconfirmed {
        std::process::exit(2);
    }
    Ok(())
}
