use anyhow::{Context, Result};
use clap::Parser;
use pwbench_core::{
    bench::{elapsed_millis, time_single_hash},
    crypto::Argon2Context,
    password::generate_password,
};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Benchmark hashing one long random password with Argon2id.
#[derive(Parser)]
#[command(name = "pwbench")]
struct Cli {
    /// Length of the generated password.
    #[arg(long, default_value_t = 50)]
    password_length: usize,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let password = generate_password(cli.password_length);
    debug!("generated a {}-character password", password.len());

    let ctx = Argon2Context::default();
    debug!("cost profile: {:?}", ctx.profile());

    let timing = time_single_hash(&ctx, &password).context("Argon2id hashing failed")?;

    println!("Password length: {}", password.len());
    println!("Hash:            {}", timing.encoded);
    println!("Elapsed time:    {}ms", elapsed_millis(timing.elapsed));

    Ok(())
}
