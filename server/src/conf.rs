use clap::Parser;

/// Serves the portfolio frontend embedded in this binary.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[clap(long, value_name = "PORTFOLIO_HOST", env = "PORTFOLIO_HOST", default_value = "127.0.0.1")]
    pub host: String,
    #[clap(long, value_name = "PORTFOLIO_PORT", env = "PORTFOLIO_PORT", default_value = "8080")]
    pub port: u16,
    /// Do not open the site in the default browser on startup.
    #[clap(long = "no-browser")]
    pub no_browser: bool,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["portfolio-server"]).unwrap();
        assert_eq!(cli.port, 8080);
        assert!(!cli.no_browser);
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "portfolio-server",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--no-browser",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.url(), "http://0.0.0.0:3000");
        assert!(cli.no_browser);
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Cli::try_parse_from(["portfolio-server", "--port", "http"]).is_err());
    }
}
