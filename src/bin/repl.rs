use fatecast::{HouseSystem, RollContext};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut ctx: RollContext = RollContext::default();
    let mut system = HouseSystem::default();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "exit" | "quit" => break,
            "" => {}
            cmd if cmd == "system" || cmd.starts_with("system ") => {
                set_system(&mut system, cmd["system".len()..].trim())
            }
            _ => match ctx.roll(&system.apply(line)) {
                Ok(result) => println!("{}", result),
                Err(why) => eprintln!("Error: {}", why),
            },
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn set_system(current: &mut HouseSystem, arg: &str) {
    match arg {
        "" => println!("Current system: {} (type 'system list' to see all)", current),
        "list" => {
            for system in HouseSystem::ALL {
                println!("  {:<10} {}", system.name(), system.description());
            }
        }
        name => match name.parse() {
            Ok(system) => {
                *current = system;
                println!("System set to '{}'.", system);
            }
            Err(why) => eprintln!("Error: {}", why),
        },
    }
}
