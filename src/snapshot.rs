use std::{fs, path::Path};

use anyhow::{Context, Result};

use chatori_boundary as json;
use chatori_core::repositories::{DishRepo, ReviewRepo, StallRepo, UserRepo};
use chatori_db_mem::Connections;

/// Loads a JSON snapshot into a fresh in-memory store. A missing file
/// yields an empty store so the first invocation starts from scratch.
pub fn load(path: &Path) -> Result<Connections> {
    let connections = Connections::init();
    if !path.exists() {
        log::info!("No data snapshot at {}, starting empty", path.display());
        return Ok(connections);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: json::Snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let db = connections.exclusive();
    for user in snapshot.users {
        let user = chatori_entities::user::User::try_from(user)?;
        db.inner().create_user(&user)?;
    }
    for stall in snapshot.stalls {
        let stall = chatori_entities::stall::Stall::try_from(stall)?;
        db.inner().create_stall(stall)?;
    }
    for review in snapshot.reviews {
        let review = chatori_entities::review::Review::try_from(review)?;
        db.inner().create_review(review)?;
    }
    for dish in snapshot.dishes {
        let dish = chatori_entities::dish::Dish::try_from(dish)?;
        db.inner().create_dish_if_it_does_not_exist(&dish)?;
    }
    drop(db);
    Ok(connections)
}

/// Writes the store contents back as a JSON snapshot.
pub fn save(path: &Path, connections: &Connections) -> Result<()> {
    let db = connections.shared();
    let snapshot = json::Snapshot {
        stalls: db
            .inner()
            .all_stalls()?
            .into_iter()
            .map(Into::into)
            .collect(),
        reviews: {
            let mut reviews = Vec::new();
            for stall in db.inner().all_stalls()? {
                reviews.extend(
                    db.inner()
                        .reviews_of_stall(stall.id.as_str())?
                        .into_iter()
                        .map(json::Review::from),
                );
            }
            reviews
        },
        users: db
            .inner()
            .all_users()?
            .into_iter()
            .map(Into::into)
            .collect(),
        dishes: db
            .inner()
            .all_dishes()?
            .into_iter()
            .map(Into::into)
            .collect(),
    };
    let contents = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
