use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wxc",
    about = "Webex Calling administration from the command line",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, env = "WEBEX_ACCESS_TOKEN", hide_env_values = true, help = "Webex access token")]
    pub token: String,

    #[arg(long, env = "WEBEX_BASE_URL", default_value = "https://webexapis.com/v1")]
    pub base_url: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand, about = "Manage locations")]
    Locations(LocationCommands),

    #[command(subcommand, about = "Browse people")]
    People(PeopleCommands),

    #[command(subcommand, about = "Browse phone numbers")]
    Numbers(NumberCommands),

    #[command(subcommand, about = "Browse call queues")]
    Queues(QueueCommands),

    #[command(subcommand, about = "Control calls of the authenticated user")]
    Calls(CallCommands),

    #[command(subcommand, about = "Browse webhooks")]
    Webhooks(WebhookCommands),
}

#[derive(Subcommand)]
pub enum LocationCommands {
    #[command(about = "List locations")]
    List {
        #[arg(long, help = "Only locations with this name")]
        name: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show one location")]
    Show {
        #[arg(help = "Location ID")]
        id: String,
    },

    #[command(about = "Create a location")]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, help = "IANA time zone, e.g. America/New_York")]
        time_zone: String,

        #[arg(long, help = "Announcement language, e.g. en_us")]
        announcement_language: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PeopleCommands {
    #[command(about = "List people")]
    List {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        location_id: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum NumberCommands {
    #[command(about = "List phone numbers")]
    List {
        #[arg(long)]
        location_id: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum QueueCommands {
    #[command(about = "List call queues")]
    List {
        #[arg(long)]
        location_id: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CallCommands {
    #[command(about = "List active calls")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Dial a number, extension or SIP URI")]
    Dial {
        destination: String,
    },

    #[command(about = "Hang up a call")]
    Hangup {
        #[arg(help = "Call ID")]
        call_id: String,
    },
}

#[derive(Subcommand)]
pub enum WebhookCommands {
    #[command(about = "List webhooks")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_locations_create() {
        let cli = Cli::try_parse_from([
            "wxc",
            "--token",
            "t",
            "locations",
            "create",
            "--name",
            "HQ",
            "--time-zone",
            "America/New_York",
        ]);
        match cli.map(|c| c.command) {
            Ok(Commands::Locations(LocationCommands::Create { name, time_zone, announcement_language })) => {
                assert_eq!(name, "HQ");
                assert_eq!(time_zone, "America/New_York");
                assert_eq!(announcement_language, None);
            },
            _ => panic!("unexpected parse"),
        }
    }
}
