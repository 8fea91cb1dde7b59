use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::auth::{generate_jwt, password, Claims};
use crate::types::Role;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Hash a password with the configured bcrypt cost")]
    HashPassword {
        #[arg(help = "Plaintext password to hash")]
        password: String,
    },

    #[command(about = "Mint a session token (development and support tooling)")]
    Token {
        #[arg(help = "Backend user id")]
        user_id: i64,
        #[arg(help = "Username to embed in the claims")]
        username: String,
        #[arg(long, default_value = "member", help = "Role claim: member, admin or super-admin")]
        role: String,
    },
}

pub async fn run(cmd: AuthCommands, json: bool) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::HashPassword { password: plaintext } => {
            let hash = password::hash_password(&plaintext).context("hash password")?;
            if json {
                println!("{}", json!({ "hash": hash }));
            } else {
                println!("{}", hash);
            }
            Ok(())
        }
        AuthCommands::Token { user_id, username, role } => {
            if Role::parse(&role).is_none() {
                anyhow::bail!("unknown role '{}'", role);
            }

            let claims = Claims::new(user_id, username, role);
            let token = generate_jwt(claims).context("generate token")?;
            if json {
                println!("{}", json!({ "token": token }));
            } else {
                println!("{}", token);
            }
            Ok(())
        }
    }
}
