use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use dotenvy::dotenv;
use ziyarat_cli::{render_check, render_coverage, render_matrix, render_modules, render_roles};
use ziyarat_models::{ModuleCategory, PermissionAction, Role, list_modules};

#[derive(Parser)]
#[command(name = "ziyarat-cli")]
#[command(about = "Ziyarat CLI - Inspect and validate role permissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registry modules
    Modules {
        /// Only modules in this category
        #[arg(short = 'c', long)]
        category: Option<ModuleCategory>,
    },
    /// List known roles
    Roles,
    /// Print the permission matrix of a role
    Matrix {
        /// Role as issued by the login API, e.g. hotel-manager
        role: String,
    },
    /// Check one permission (prompts for anything not provided)
    Check {
        #[arg(short = 'r', long)]
        role: Option<String>,

        #[arg(short = 'm', long)]
        module: Option<String>,

        #[arg(short = 'a', long)]
        action: Option<String>,
    },
    /// Verify every role matrix covers the module registry
    Validate,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Modules { category } => print!("{}", render_modules(category)),
        Commands::Roles => print!("{}", render_roles()),
        Commands::Matrix { role } => print!("{}", render_matrix(&role)),
        Commands::Check {
            role,
            module,
            action,
        } => {
            let role = match role {
                Some(r) => r,
                None => {
                    let roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
                    let index = Select::new()
                        .with_prompt("Role")
                        .items(&roles)
                        .default(0)
                        .interact()?;
                    roles[index].to_string()
                }
            };

            let module = match module {
                Some(m) => m,
                None => Input::<String>::new()
                    .with_prompt(format!(
                        "Module ({})",
                        list_modules()
                            .iter()
                            .map(|m| m.id)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                    .interact_text()?,
            };

            let action = match action {
                Some(a) => a,
                None => {
                    let actions: Vec<&str> =
                        PermissionAction::ALL.iter().map(|a| a.as_str()).collect();
                    let index = Select::new()
                        .with_prompt("Action")
                        .items(&actions)
                        .default(0)
                        .interact()?;
                    actions[index].to_string()
                }
            };

            println!("{}", render_check(&role, &module, &action));
        }
        Commands::Validate => {
            let (ok, report) = render_coverage();
            if ok {
                println!("✅ {}", report);
            } else {
                eprintln!("❌ Role matrices do not match the module registry:");
                eprint!("{}", report);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
