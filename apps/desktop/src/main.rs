use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    load_settings, remaining_quota, ClientSettings, FileTokenStore, MarketClient, OAuthCallback,
    Quota, SessionManager,
};
use shared::{
    domain::{Feature, Plan, RenovationLevel, UserProfile},
    protocol::{report_filename, CalculateRequest, CalculationResult},
};

#[derive(Parser, Debug)]
#[command(name = "bighouse", about = "Real-estate analytics from the terminal")]
struct Args {
    /// Overrides the API base URL from settings and environment.
    #[arg(long, global = true)]
    api_base: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Prints the address to open in a browser for Google sign-in.
    OauthUrl,
    /// Adopts the token from the redirect location the browser landed on.
    OauthComplete {
        #[arg(long)]
        callback: String,
    },
    Whoami,
    Logout,
    Upgrade {
        #[arg(long)]
        plan: Plan,
    },
    Research {
        #[arg(long)]
        query: String,
    },
    Calculate(CalculateArgs),
    /// Runs the calculator and saves the generated document.
    Report {
        #[command(flatten)]
        input: CalculateArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct CalculateArgs {
    #[arg(long)]
    buy_price: f64,
    #[arg(long)]
    surface: f64,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "medio")]
    renovation: RenovationLevel,
}

impl CalculateArgs {
    fn to_request(&self) -> CalculateRequest {
        CalculateRequest {
            buy_price: self.buy_price,
            surface: self.surface,
            city: self.city.trim().to_string(),
            renovation_level: self.renovation,
        }
    }
}

fn print_profile(profile: &UserProfile) {
    println!("{} <{}>", profile.name, profile.email);
    println!("plan: {}", profile.plan);
    for feature in [Feature::DeepResearch, Feature::Calculator] {
        let label = match feature {
            Feature::DeepResearch => "deep research",
            _ => "calculator",
        };
        match remaining_quota(feature, profile) {
            Quota::Unlimited => println!("{label}: unlimited"),
            Quota::Remaining(left) => println!("{label}: {left} left today"),
            Quota::Locked => println!("{label}: requires an upgrade"),
        }
    }
}

fn print_calculation(result: &CalculationResult) {
    for key in [
        CalculationResult::RENOVATION_COST,
        CalculationResult::ESTIMATED_VALUE,
        CalculationResult::ROI,
        CalculationResult::DURATION_MONTHS,
    ] {
        if let Some(value) = result.display(key) {
            println!("{key}: {value}");
        }
    }
}

async fn restored(session: &SessionManager) -> Result<UserProfile> {
    match session.restore().await.context("failed to restore session")? {
        Some(profile) => Ok(profile),
        None => bail!("not signed in; run `login` or `oauth-complete` first"),
    }
}

async fn run(args: Args, settings: ClientSettings) -> Result<()> {
    let api = Arc::new(MarketClient::new(settings.api_base.clone()));
    let store = Arc::new(FileTokenStore::new(settings.token_path.clone()));
    let session = SessionManager::new(api.clone(), store);

    match args.command {
        Command::Register {
            email,
            password,
            name,
        } => {
            let profile = session
                .register(&email, &password, &name)
                .await
                .context("registration failed")?;
            print_profile(&profile);
            println!("choose a plan with `upgrade --plan <free|pro|plus>`");
        }
        Command::Login { email, password } => {
            let profile = session
                .login(&email, &password)
                .await
                .context("login failed")?;
            print_profile(&profile);
        }
        Command::OauthUrl => println!("{}", api.google_auth_url()),
        Command::OauthComplete { callback } => {
            let Some(callback) =
                OAuthCallback::consume(&callback).context("invalid callback location")?
            else {
                bail!("callback location carries no token");
            };
            tracing::info!(location = %callback.scrubbed_location(), "completing oauth sign-in");
            let profile = session
                .complete_oauth(callback.token())
                .await
                .context("oauth sign-in failed")?;
            print_profile(&profile);
        }
        Command::Whoami => print_profile(&restored(&session).await?),
        Command::Logout => {
            session.logout().await.context("failed to sign out")?;
            println!("signed out");
        }
        Command::Upgrade { plan } => {
            restored(&session).await?;
            let profile = session.upgrade(plan).await.context("upgrade failed")?;
            print_profile(&profile);
        }
        Command::Research { query } => {
            if query.trim().is_empty() {
                bail!("query must not be blank");
            }
            restored(&session).await?;
            let response = session
                .deep_research(query.trim())
                .await
                .context("deep research failed")?;
            println!("{}", response.result);
        }
        Command::Calculate(input) => {
            restored(&session).await?;
            let result = session
                .calculate(&input.to_request())
                .await
                .context("calculation failed")?;
            print_calculation(&result);
        }
        Command::Report { input, out } => {
            restored(&session).await?;
            let request = input.to_request();
            let result = session
                .calculate(&request)
                .await
                .context("calculation failed")?;
            print_calculation(&result);
            let document = session
                .generate_report(&request, &result)
                .await
                .context("report generation failed")?;
            let path = out.unwrap_or_else(|| PathBuf::from(report_filename(&request.city)));
            tokio::fs::write(&path, &document)
                .await
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            println!("saved {} ({} bytes)", path.display(), document.len());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_base) = args.api_base.as_deref() {
        settings.api_base = client_core::config::normalize_api_base(api_base);
    }
    tracing::debug!(api_base = %settings.api_base, "using api");

    run(args, settings).await
}
