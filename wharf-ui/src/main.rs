mod settings;
mod shell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CliMode {
    Status,
    List { path: String, page: Option<u32> },
    Tasks,
    ShowSettings,
    Help,
}

fn parse_cli_mode<I>(args: I) -> anyhow::Result<CliMode>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().skip(1);
    let mut mode = CliMode::Status;
    while let Some(arg) = args.next() {
        mode = match arg.as_str() {
            "--status" => CliMode::Status,
            "--list" => {
                let Some(path) = args.next() else {
                    anyhow::bail!("--list requires a path");
                };
                CliMode::List { path, page: None }
            }
            "--page" => {
                let Some(value) = args.next() else {
                    anyhow::bail!("--page requires a number");
                };
                let page: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid page number: {value}"))?;
                match mode {
                    CliMode::List { path, .. } => CliMode::List {
                        path,
                        page: Some(page),
                    },
                    _ => anyhow::bail!("--page only applies after --list"),
                }
            }
            "--tasks" => CliMode::Tasks,
            "--show-settings" => CliMode::ShowSettings,
            "--help" | "-h" => {
                print_help();
                return Ok(CliMode::Help);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        };
    }
    Ok(mode)
}

fn print_help() {
    println!("Usage: wharf-ui [MODE]");
    println!("  --status            Check server reachability and print settings (default)");
    println!("  --list PATH         Resolve PATH and print the folder listing or file details");
    println!("  --page N            Page to fetch for --list (pagination mode)");
    println!("  --tasks             Print administrative task queues");
    println!("  --show-settings     Print the effective settings as JSON");
    println!();
    println!("Settings come from WHARF_SERVER_URL, WHARF_BASE_PATH, WHARF_PASSWORD,");
    println!("WHARF_TOKEN, WHARF_PAGINATION and WHARF_PAGE_SIZE.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let mode = parse_cli_mode(std::env::args())?;
    if mode == CliMode::Help {
        return Ok(());
    }
    let settings = settings::read_settings();
    match mode {
        CliMode::Status => shell::run_status(&settings).await,
        CliMode::List { path, page } => shell::run_list(&settings, &path, page).await,
        CliMode::Tasks => shell::run_tasks(&settings).await,
        CliMode::ShowSettings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        CliMode::Help => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliMode> {
        let mut full = vec!["wharf-ui".to_string()];
        full.extend(args.iter().map(|arg| arg.to_string()));
        parse_cli_mode(full)
    }

    #[test]
    fn defaults_to_status() {
        assert_eq!(parse(&[]).unwrap(), CliMode::Status);
    }

    #[test]
    fn list_takes_a_path_and_optional_page() {
        assert_eq!(
            parse(&["--list", "/docs"]).unwrap(),
            CliMode::List {
                path: "/docs".to_string(),
                page: None
            }
        );
        assert_eq!(
            parse(&["--list", "/docs", "--page", "3"]).unwrap(),
            CliMode::List {
                path: "/docs".to_string(),
                page: Some(3)
            }
        );
    }

    #[test]
    fn page_without_list_is_rejected() {
        assert!(parse(&["--page", "3"]).is_err());
        assert!(parse(&["--list", "/docs", "--page", "x"]).is_err());
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse(&["--bogus"]).is_err());
    }
}
