use activities_client::ui::render_screen;
use activities_client::{DirectoryClient, MutationController};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url = env::var("ACTIVITIES_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    info!("using activities API at {base_url}");

    let mut controller = MutationController::new(DirectoryClient::new(base_url));
    let _ = controller.refresh().await;
    println!("{}", render_screen(&controller.view, &controller.notices).await);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let mut parts = line.splitn(3, ' ');
        match parts.next().unwrap_or("") {
            "" => continue,
            "list" => {
                let _ = controller.refresh().await;
            }
            "signup" => {
                let email = parts.next().unwrap_or("");
                let activity = parts.next().unwrap_or("");
                let _ = controller.signup(email, activity).await;
            }
            "unregister" => {
                let email = parts.next().unwrap_or("");
                let activity = parts.next().unwrap_or("");
                let _ = controller.unregister(activity, email).await;
            }
            "quit" | "exit" => break,
            _ => {
                print_help();
                continue;
            }
        }
        println!("{}", render_screen(&controller.view, &controller.notices).await);
    }

    Ok(())
}

fn print_help() {
    println!("commands: list | signup <email> <activity> | unregister <email> <activity> | quit");
}
