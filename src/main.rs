//! vidlist - Entry Point
//!
//! Loads a page of video records, binds every row against an in-memory
//! favorites store and prints one line per row.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use vidlist::format::share_request;
use vidlist::model::{AppError, InvalidVideoId, VideoId};
use vidlist::store::{bind_all, FavoritesStore, InMemoryFavorites, RowView, VideoListStore};

/// vidlist - print a bound video list
#[derive(Parser, Debug)]
#[command(name = "vidlist")]
#[command(version)]
#[command(about = "Bind a JSON list of video records and print the rows")]
pub struct Args {
    /// Path to a JSON array of records (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Treat the list as a favorites-only view
    #[arg(long)]
    pub favorites_view: bool,

    /// Mark a video id as favorited (repeatable)
    #[arg(long = "favorite", value_name = "ID", value_parser = parse_video_id)]
    pub favorites: Vec<VideoId>,

    /// Also print each row's share text
    #[arg(long)]
    pub share: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_video_id(raw: &str) -> Result<VideoId, InvalidVideoId> {
    VideoId::new(raw)
}

/// Favorite each id through the list, as a checkbox click would.
fn apply_favorites(
    store: &mut VideoListStore,
    ids: &[VideoId],
    favorites: &mut impl FavoritesStore,
) -> Result<(), AppError> {
    for id in ids {
        if !store.contains(id) {
            warn!(%id, "Favorite id not in the loaded records");
            continue;
        }
        store.toggle_favorite(id, true, favorites)?;
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = vidlist::config::load_config_with_precedence(args.config.clone())?;
        let merged = vidlist::config::merge_config(config_file);
        let with_env = vidlist::config::apply_env_overrides(merged);
        let favorites_view_override = args.favorites_view.then_some(true);
        vidlist::config::apply_cli_overrides(with_env, favorites_view_override)
    };

    vidlist::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let records = vidlist::source::load_records(args.file.clone())?;

    let mut store = VideoListStore::new(config.favorites_view);
    store.replace_all(records);
    info!(count = store.count(), "Loaded videos");

    let mut favorites = InMemoryFavorites::new();
    apply_favorites(&mut store, &args.favorites, &mut favorites)?;

    for (position, row) in bind_all(&mut store, &favorites).iter().enumerate() {
        println!("{:>3}. {}", position + 1, row);
        if !args.share {
            continue;
        }
        if let RowView::Video(video) = row {
            if let Some(record) = store.position_of(&video.id).and_then(|pos| store.item_at(pos)) {
                let request = share_request(record, &config.link_prefix, &config.app_name);
                println!("     {}", request.text);
            }
        }
    }

    Ok(())
}
