use helpers_core::config::load_config;
use helpers_service::password::{Argon2Passwords, PasswordService};

fn main() -> anyhow::Result<()> {
    let password = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "password".to_string());

    let config = load_config()?;
    let service = Argon2Passwords::new(&config.password)?;

    match service.hash(&password) {
        Ok(hash) => {
            println!("{hash}");
            Ok(())
        }
        Err(err) => {
            eprintln!("Failed to hash password: {err}");
            std::process::exit(1);
        }
    }
}
