use networker_config::Config;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== networker Configuration ===\n");

        println!("Config File:");
        if path.exists() {
            println!("  Path: {}", path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", path.display());
        }
        println!();

        println!("Parser:");
        println!("  Dedupe Tags: {}", config.parser.dedupe_tags);
        println!(
            "  UTC Offset: {}",
            format_offset(config.parser.utc_offset_minutes)
        );
        println!();

        println!("User:");
        println!("  Default User ID: {}", config.user.default_user_id);
        println!();

        println!("Contacts:");
        println!("  List Limit: {}", config.contacts.list_limit);

        Ok(())
    }
}

fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

#[cfg(test)]
mod tests {
    use super::format_offset;

    #[test]
    fn offsets_are_formatted_as_hours_and_minutes() {
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(120), "+02:00");
        assert_eq!(format_offset(-330), "-05:30");
    }
}
