use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use travelog::application::{
    init::init, list_entries, list_liked, list_saved, AddEntryService, ConfigService, EntryDraft,
    FavoritesService, SaveOutcome,
};
use travelog::cli::{format_entry_list, format_liked_list, format_saved_list, Cli, Commands};
use travelog::domain::Theme;
use travelog::error::TravelogError;
use travelog::infrastructure::{
    ConsoleNotifier, Diary, DiaryRepository, FileKeyValueStore, FileSystemRepository, Notifier,
    OfflineGeocoder, SilentNotifier,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TRAVELOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_diary() -> Result<(FileSystemRepository, Diary<FileKeyValueStore>), TravelogError> {
    let repo = FileSystemRepository::discover()?;
    let diary = Diary::open(repo.key_value_store());
    Ok((repo, diary))
}

fn run(cli: Cli) -> Result<(), TravelogError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Add {
            images,
            description,
            lat,
            lon,
            address,
        }) => {
            let (repo, diary) = open_diary()?;
            let config = repo.load_config()?;

            let notifier: &dyn Notifier = if config.notifications {
                &ConsoleNotifier
            } else {
                &SilentNotifier
            };
            let service =
                AddEntryService::new(&diary.entries, &OfflineGeocoder, notifier, config.max_photos);

            let draft = EntryDraft {
                image_uris: images,
                description,
                coordinates: lat.zip(lon),
                address,
            };
            let entry = service.execute(draft)?;
            println!("Added entry {}", entry.id);
            Ok(())
        }
        Some(Commands::List) => {
            let (_, diary) = open_diary()?;
            print!("{}", with_newline(format_entry_list(&list_entries(&diary))));
            Ok(())
        }
        Some(Commands::Remove { id }) => {
            let (_, diary) = open_diary()?;
            if !diary.entries.remove(&id)? {
                return Err(TravelogError::EntryNotFound(id));
            }
            println!("Deleted entry {}", id);
            Ok(())
        }
        Some(Commands::Save { id }) => {
            let (_, mut diary) = open_diary()?;
            match FavoritesService::new(&mut diary).toggle_saved(&id)? {
                SaveOutcome::Saved => println!("Saved to favorites: {}", id),
                SaveOutcome::Removed => println!("Removed from favorites: {}", id),
            }
            Ok(())
        }
        Some(Commands::Unsave { id }) => {
            let (_, mut diary) = open_diary()?;
            FavoritesService::new(&mut diary).unsave(&id)?;
            println!("Removed from favorites: {}", id);
            Ok(())
        }
        Some(Commands::Saved) => {
            let (_, diary) = open_diary()?;
            print!("{}", with_newline(format_saved_list(&list_saved(&diary))));
            Ok(())
        }
        Some(Commands::Like { id }) => {
            let (_, mut diary) = open_diary()?;
            if FavoritesService::new(&mut diary).toggle_like(&id)? {
                println!("Liked {}", id);
            } else {
                println!("Unliked {}", id);
            }
            Ok(())
        }
        Some(Commands::Liked) => {
            let (_, diary) = open_diary()?;
            print!("{}", with_newline(format_liked_list(&list_liked(&diary))));
            Ok(())
        }
        Some(Commands::Share { id }) => {
            let (_, mut diary) = open_diary()?;
            let message = FavoritesService::new(&mut diary).share_message(&id)?;
            println!("{}", message);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("theme = {}", config.theme);
                println!("max_photos = {}", config.max_photos);
                println!("notifications = {}", config.notifications);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: travelog config [--list | <key> [<value>]]");
                println!("Valid keys: theme, max_photos, notifications, created");
                Ok(())
            }
        }
        Some(Commands::Theme) => {
            let repo = FileSystemRepository::discover()?;
            let theme = ConfigService::new(repo).toggle_theme()?;
            let icon = match theme {
                Theme::Light => "☀",
                Theme::Dark => "☾",
            };
            println!("Theme: {} {}", theme, icon);
            Ok(())
        }
        None => {
            println!("travelog - Local travel diary");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Listings end with a newline whether or not they are empty
fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_newline() {
        assert_eq!(with_newline("No entries found".to_string()), "No entries found\n");
        assert_eq!(with_newline("a\n".to_string()), "a\n");
    }
}
