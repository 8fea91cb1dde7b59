use anyhow::Context;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Print the resolved configuration")]
    Show,
}

pub async fn run(cmd: ConfigCommands, json: bool) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = crate::config::config();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(config).context("serialize config")?
                );
            } else {
                println!("environment:      {:?}", config.environment);
                println!("backend base:     {}", config.backend.base_url);
                println!("page size:        {}", config.backend.page_size);
                println!("public routes:    {}", config.gate.public_routes.join(", "));
                println!("admin routes:     {}", config.gate.admin_routes.join(", "));
                println!("unauthorized:     {}", config.gate.unauthorized_path);
                println!("jwt expiry (h):   {}", config.security.jwt_expiry_hours);
                println!("bcrypt cost:      {}", config.security.bcrypt_cost);
            }
            Ok(())
        }
    }
}
