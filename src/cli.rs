use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::thread_rng;

use chatori_application::prelude as flows;
use chatori_core::{
    usecases,
    util::discovery::{radius_limit, DiscoveryQuery, SortMode},
    LocationGateway,
};
use chatori_entities::{email::EmailAddress, geo::MapPoint};

use crate::{cfg::Cfg, snapshot};

/// Position fixed by the `--at` flag or the configuration, standing in
/// for a live location provider.
struct StaticLocation(Option<MapPoint>);

impl LocationGateway for StaticLocation {
    fn last_known_position(&self) -> Option<MapPoint> {
        self.0
    }
}

#[derive(Debug, Parser)]
#[command(name = "chatori", version, about = "Street food stall discovery")]
pub struct Args {
    /// Path to the JSON data snapshot
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Current position as "LAT,LNG"
    #[arg(long, value_name = "LAT,LNG")]
    pub at: Option<MapPoint>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search stalls by text, category, rating, and radius
    Search {
        /// Free-text query matched against name, dish type, and area
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        dish_type: String,
        #[arg(long, default_value = "")]
        area: String,
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,
        /// Maximum distance in km; non-positive values mean no limit
        #[arg(long)]
        radius_km: Option<f64>,
        /// One of "rating", "name", "distance"
        #[arg(long, default_value = "rating")]
        sort: String,
    },
    /// Show the start screen rails
    Home {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one stall with its reviews
    Show { stall_id: String },
    /// List the distinct dish types and areas
    Options,
    /// Sign up a user
    Signup {
        user_id: String,
        name: String,
        email: String,
    },
    /// Submit a new stall
    Add {
        name: String,
        #[arg(long, default_value = "")]
        dish_type: String,
        #[arg(long, default_value = "")]
        area: String,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
        #[arg(long)]
        created_by: String,
    },
    /// Write a review for a stall
    Review {
        stall_id: String,
        user_id: String,
        rating: f64,
        comment: String,
    },
    /// Toggle a stall in a user's favorites
    Favorite { user_id: String, stall_id: String },
    /// List a user's favorite stalls
    Favorites { user_id: String },
}

pub fn run(args: Args, cfg: Cfg) -> Result<()> {
    let data_path = args.data.unwrap_or_else(|| cfg.data_path.clone());
    let location = StaticLocation(args.at.or(cfg.position));
    let origin = location.last_known_position();
    let connections = snapshot::load(&data_path)?;

    match args.command {
        Command::Search {
            query,
            dish_type,
            area,
            min_rating,
            radius_km,
            sort,
        } => {
            let query = DiscoveryQuery {
                text: query,
                dish_type,
                area,
                min_rating,
                radius: radius_km.and_then(radius_limit),
                sort: SortMode::from_param(&sort),
            };
            let stalls = flows::search(&connections, &query, origin)?;
            print_stalls(&stalls, origin);
        }
        Command::Home { limit } => {
            let limit = limit.unwrap_or(cfg.home_section_limit);
            let feed = flows::load_home_feed(&connections, origin, limit, &mut thread_rng())?;
            println!("Recommended:");
            print_stalls(&feed.recommended, origin);
            println!("Nearby:");
            print_stalls(&feed.nearby, origin);
            println!("Top rated:");
            print_stalls(&feed.top_rated, origin);
        }
        Command::Show { stall_id } => {
            let (stall, reviews) = flows::stall_details(&connections, &stall_id, None)?;
            print_stalls(&[stall], origin);
            for review in reviews {
                println!(
                    "  {:.1}★ by {} on {}: {}",
                    f64::from(review.rating),
                    review.author_name,
                    review.created_at,
                    review.comment
                );
            }
        }
        Command::Options => {
            let options = flows::filter_options(&connections)?;
            println!("Dish types: {}", options.dish_types.join(", "));
            println!("Areas: {}", options.areas.join(", "));
        }
        Command::Signup {
            user_id,
            name,
            email,
        } => {
            let user = flows::sign_up(
                &connections,
                usecases::NewUser {
                    id: user_id.into(),
                    name,
                    email: email.parse::<EmailAddress>()?,
                    image: None,
                },
            )?;
            println!("Registered {} <{}>", user.name, user.email);
            snapshot::save(&data_path, &connections)?;
        }
        Command::Add {
            name,
            dish_type,
            area,
            lat,
            lng,
            created_by,
        } => {
            let stall = flows::submit_stall(
                &connections,
                usecases::NewStall {
                    name,
                    dish_type,
                    area,
                    lat,
                    lng,
                    created_by: created_by.into(),
                    ..Default::default()
                },
            )?;
            println!("Added stall {}", stall.id);
            snapshot::save(&data_path, &connections)?;
        }
        Command::Review {
            stall_id,
            user_id,
            rating,
            comment,
        } => {
            let review_id = flows::create_review(
                &connections,
                usecases::NewStallReview {
                    stall: stall_id.into(),
                    user: user_id.into(),
                    rating: rating.into(),
                    comment,
                },
            )?;
            println!("Added review {review_id}");
            snapshot::save(&data_path, &connections)?;
        }
        Command::Favorite { user_id, stall_id } => {
            let is_favorite = flows::toggle_favorite(&connections, &user_id, stall_id.into())?;
            if is_favorite {
                println!("Added to favorites");
            } else {
                println!("Removed from favorites");
            }
            snapshot::save(&data_path, &connections)?;
        }
        Command::Favorites { user_id } => {
            let stalls = flows::favorite_stalls(&connections, &user_id)?;
            print_stalls(&stalls, origin);
        }
    }
    Ok(())
}

fn print_stalls(stalls: &[chatori_entities::stall::Stall], origin: Option<MapPoint>) {
    use chatori_core::util::discovery::distance_km;

    if stalls.is_empty() {
        println!("  (no stalls)");
        return;
    }
    for stall in stalls {
        let rating = if stall.rating.count > 0 {
            format!("{:.1}★ ({})", f64::from(stall.rating.value), stall.rating.count)
        } else {
            "unrated".to_string()
        };
        let distance = origin
            .filter(|_| !stall.location.pos.is_unknown())
            .map(|origin| format!(", {:.1} km away", distance_km(origin, stall.location.pos)))
            .unwrap_or_default();
        println!(
            "  {} [{}] {} in {}, {}{}",
            stall.name,
            stall.id,
            stall.dish_type,
            stall.area(),
            rating,
            distance
        );
    }
}
