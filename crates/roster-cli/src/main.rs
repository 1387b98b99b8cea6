use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use roster_cli::seeder;
use roster_config::DatabaseConfig;
use roster_db::{PgPool, init_db_pool, run_migrations};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "Roster CLI - Administrative tools for the Roster API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake students
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "25")]
        students: usize,
    },
    /// Soft-delete every student
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print all live students
    List,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => fail("connecting to database", e),
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed { students } => handle_seed(&pool, students).await,
        Commands::Clear { yes } => handle_clear(&pool, yes).await,
        Commands::List => handle_list(&pool).await,
    }
}

fn fail(action: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ Error {}: {}", action, error);
    std::process::exit(1);
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(_) => println!("✅ Migrations applied"),
        Err(e) => fail("running migrations", e),
    }
}

async fn handle_seed(pool: &PgPool, students: usize) {
    if let Err(e) = run_migrations(pool).await {
        fail("running migrations", e);
    }

    match seeder::seed_students(pool, students).await {
        Ok(ids) => println!("✅ Created {} students", ids.len()),
        Err(e) => fail("seeding students", e),
    }
}

async fn handle_clear(pool: &PgPool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every student?")
            .default(false)
            .interact()
            .unwrap_or_else(|e| fail("reading confirmation", e));
        if !confirmed {
            println!("Aborted");
            return;
        }
    }

    match seeder::clear_students(pool).await {
        Ok(count) => println!("✅ Cleared {} students", count),
        Err(e) => fail("clearing students", e),
    }
}

async fn handle_list(pool: &PgPool) {
    let students = match seeder::list_students(pool).await {
        Ok(students) => students,
        Err(e) => fail("listing students", e),
    };

    if students.is_empty() {
        println!("No students registered yet.");
        return;
    }

    println!("{:>6}  {:<32}  {:<11}  {:<9}", "ID", "NAME", "CPF", "RG");
    for student in students {
        println!(
            "{:>6}  {:<32}  {:<11}  {:<9}",
            student.id, student.name, student.cpf, student.rg
        );
    }
}
