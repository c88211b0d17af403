use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use reelbase_cli::{seeder, users};
use reelbase_config::SecurityConfig;
use reelbase_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "reelbase-cli")]
#[command(about = "Reelbase CLI - Administrative tools for Reelbase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a login credential
    CreateUser {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the catalog with fake videos and metadata
    SeedVideos {
        /// Number of videos to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,
    },
    /// Delete every video (cascades to metadata and engagements)
    ClearVideos,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateUser { username, password } => {
            let username = match username {
                Some(username) => username,
                None => Input::new().with_prompt("Username").interact_text()?,
            };
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            let scheme = SecurityConfig::from_env().password_scheme;
            if scheme.is_reversible() {
                println!("⚠️  PASSWORD_SCHEME={} stores passwords reversibly", scheme);
            }

            let id = users::create_user(&pool, &username, &password, scheme).await?;
            println!("\n✅ User created successfully!");
            println!("   Id: {}", id);
            println!("   Username: {}", username.trim());
        }
        Commands::SeedVideos { count } => {
            seeder::seed_videos(&pool, count).await?;
        }
        Commands::ClearVideos => {
            seeder::clear_videos(&pool).await?;
        }
    }

    Ok(())
}
